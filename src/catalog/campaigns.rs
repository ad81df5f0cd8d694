#[derive(Debug, Clone, Copy)]
pub struct QuestionTemplate {
	pub id: &'static str,
	pub question: &'static str,
	/// One of `text`, `textarea`, `select`, `checkbox`.
	pub kind: &'static str,
	pub is_required: bool,
	pub max_length: Option<i32>,
	pub options: &'static [&'static str],
}

pub const BASE_QUESTIONS: &[QuestionTemplate] = &[
	QuestionTemplate {
		id: "personal_intro",
		question: "Hãy giới thiệu về bản thân bạn",
		kind: "textarea",
		is_required: true,
		max_length: Some(800),
		options: &[],
	},
	QuestionTemplate {
		id: "motivation",
		question: "Tại sao bạn muốn tham gia câu lạc bộ này?",
		kind: "textarea",
		is_required: true,
		max_length: Some(600),
		options: &[],
	},
];

const TECH_QUESTIONS: &[QuestionTemplate] = &[
	QuestionTemplate {
		id: "programming_experience",
		question: "Bạn có kinh nghiệm lập trình không? Nếu có, hãy chia sẻ.",
		kind: "textarea",
		is_required: false,
		max_length: Some(400),
		options: &[],
	},
	QuestionTemplate {
		id: "tech_interests",
		question: "Bạn quan tâm đến lĩnh vực công nghệ nào?",
		kind: "checkbox",
		is_required: true,
		max_length: None,
		options: &[
			"Web Development",
			"Mobile App",
			"AI/ML",
			"Data Science",
			"Cybersecurity",
			"Game Development",
		],
	},
];

const SPORTS_QUESTIONS: &[QuestionTemplate] = &[
	QuestionTemplate {
		id: "sports_experience",
		question: "Bạn có kinh nghiệm chơi thể thao không?",
		kind: "select",
		is_required: true,
		max_length: None,
		options: &["Chưa bao giờ", "Nghiệp dư", "Bán chuyên nghiệp", "Chuyên nghiệp"],
	},
	QuestionTemplate {
		id: "preferred_sports",
		question: "Môn thể thao bạn yêu thích nhất?",
		kind: "text",
		is_required: true,
		max_length: Some(100),
		options: &[],
	},
];

const ACADEMIC_QUESTIONS: &[QuestionTemplate] = &[
	QuestionTemplate {
		id: "academic_field",
		question: "Lĩnh vực học thuật bạn quan tâm nhất?",
		kind: "text",
		is_required: true,
		max_length: Some(150),
		options: &[],
	},
	QuestionTemplate {
		id: "research_interest",
		question: "Bạn có muốn tham gia nghiên cứu không?",
		kind: "select",
		is_required: false,
		max_length: None,
		options: &["Rất muốn", "Có thể", "Chưa chắc chắn", "Không quan tâm"],
	},
];

const ARTS_QUESTIONS: &[QuestionTemplate] = &[
	QuestionTemplate {
		id: "art_skills",
		question: "Bạn có kỹ năng nghệ thuật gì?",
		kind: "checkbox",
		is_required: false,
		max_length: None,
		options: &[
			"Vẽ",
			"Hát",
			"Nhảy",
			"Chơi nhạc cụ",
			"Nhiếp ảnh",
			"Thiết kế",
			"Viết lách",
		],
	},
	QuestionTemplate {
		id: "art_portfolio",
		question: "Bạn có portfolio nghệ thuật không? (Link hoặc mô tả)",
		kind: "textarea",
		is_required: false,
		max_length: Some(300),
		options: &[],
	},
];

/// Campaign themes. The club store uses `Văn hóa` and `Tình nguyện` where the
/// recruitment copy talks about arts and community work.
pub fn campaign_theme(club_category: &str) -> &str {
	match club_category {
		"Văn hóa" => "Nghệ thuật",
		"Tình nguyện" => "Cộng đồng",
		other => other,
	}
}

pub fn category_questions(theme: &str) -> &'static [QuestionTemplate] {
	match theme {
		"Công nghệ" => TECH_QUESTIONS,
		"Thể thao" => SPORTS_QUESTIONS,
		"Học thuật" => ACADEMIC_QUESTIONS,
		"Nghệ thuật" => ARTS_QUESTIONS,
		_ => &[],
	}
}

const COMMUNITY_TITLES: &[&str] = &[
	"Tuyển tình nguyện viên",
	"Mở rộng đội ngũ hoạt động xã hội",
	"Tham gia phục vụ cộng đồng",
	"Community Service Recruitment",
];

/// Title templates; `{season}` is substituted.
pub fn title_templates(theme: &str) -> &'static [&'static str] {
	match theme {
		"Công nghệ" => &[
			"Tuyển thành viên Tech Club Kỳ {season}",
			"Mở rộng đội ngũ Developer",
			"Tham gia cộng đồng Lập trình viên",
			"Recruitment Drive - Programming Club",
		],
		"Thể thao" => &[
			"Tuyển cầu thủ mùa giải mới",
			"Mở rộng đội hình Sports Club",
			"Tham gia đội tuyển thể thao",
			"Recruitment - Athletic Team",
		],
		"Học thuật" => &[
			"Tuyển thành viên nghiên cứu",
			"Mở rộng nhóm học thuật",
			"Tham gia dự án nghiên cứu",
			"Academic Club Recruitment",
		],
		"Nghệ thuật" => &[
			"Tuyển nghệ sĩ tài năng",
			"Mở rộng cộng đồng sáng tạo",
			"Tham gia đoàn nghệ thuật",
			"Arts Club Open Recruitment",
		],
		"Kinh doanh" => &[
			"Tuyển thành viên Business Club",
			"Mở rộng mạng lưới kinh doanh",
			"Tham gia dự án khởi nghiệp",
			"Entrepreneurship Club Recruitment",
		],
		_ => COMMUNITY_TITLES,
	}
}

pub const SEASONS: &[&str] = &["Xuân", "Hè", "Thu", "Đông"];

pub fn descriptions(club_name: &str, club_category: &str) -> [String; 3] {
	let field = club_category.to_lowercase();
	[
		format!(
			"{club_name} đang tìm kiếm những thành viên năng động và nhiệt huyết để cùng phát triển câu lạc bộ. \
			 Chúng tôi cam kết mang đến môi trường học tập và làm việc chuyên nghiệp, cơ hội networking rộng lớn \
			 và nhiều hoạt động thú vị trong lĩnh vực {field}."
		),
		format!(
			"Bạn đam mê {field}? Hãy tham gia {club_name}! \
			 Chúng tôi là cộng đồng gồm những người trẻ năng động, luôn sẵn sàng học hỏi và chia sẻ kinh nghiệm. \
			 Đây là cơ hội tuyệt vời để bạn phát triển kỹ năng và mở rộng mối quan hệ."
		),
		format!(
			"{club_name} tự hào là một trong những câu lạc bộ {field} hàng đầu. \
			 Chúng tôi đang mở rộng đội ngũ với mong muốn tìm kiếm những tài năng mới. \
			 Nếu bạn có niềm đam mê và mong muốn đóng góp, đây chính là nơi dành cho bạn!"
		),
	]
}

pub const BASE_REQUIREMENTS: &[&str] = &[
	"Có tinh thần trách nhiệm và làm việc nhóm tốt",
	"Cam kết tham gia hoạt động đều đặn",
	"Có thái độ học hỏi và phát triển bản thân",
];

pub fn extra_requirements(theme: &str) -> &'static [&'static str] {
	match theme {
		"Công nghệ" => &[
			"Có kiến thức cơ bản về lập trình (ưu tiên)",
			"Sẵn sàng học hỏi công nghệ mới",
		],
		"Thể thao" => &["Có sức khỏe tốt", "Đam mê thể thao và tinh thần thi đấu"],
		"Học thuật" => &[
			"Có thành tích học tập tốt",
			"Quan tâm đến nghiên cứu khoa học",
		],
		_ => &[],
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn culture_and_volunteer_clubs_get_themed_copy() {
		assert_eq!(campaign_theme("Văn hóa"), "Nghệ thuật");
		assert_eq!(category_questions(campaign_theme("Văn hóa")).len(), 2);
		assert_eq!(title_templates(campaign_theme("Tình nguyện")), COMMUNITY_TITLES);
		assert_eq!(title_templates("Khác"), COMMUNITY_TITLES);
		assert!(extra_requirements("Kinh doanh").is_empty());
	}

	#[test]
	fn descriptions_lowercase_the_category() {
		let texts = descriptions("CLB Toán học", "Học thuật");
		assert!(texts[0].contains("lĩnh vực học thuật."));
		assert!(texts[1].starts_with("Bạn đam mê học thuật?"));
		assert!(!texts[2].contains("  "));
	}
}
