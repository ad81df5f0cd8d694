#[derive(Debug, Clone, Copy)]
pub struct EventTemplate {
	pub title: &'static str,
	/// Event kind (Workshop, Seminar, Competition, Social, Performance, Exhibition).
	pub category: &'static str,
	pub description: &'static str,
	pub short_description: &'static str,
	pub requirements: &'static [&'static str],
	pub tags: &'static [&'static str],
	pub max_participants: i64,
	pub participation_fee: i64,
}

const fn event(
	title: &'static str,
	category: &'static str,
	description: &'static str,
	short_description: &'static str,
	requirements: &'static [&'static str],
	tags: &'static [&'static str],
	max_participants: i64,
	participation_fee: i64,
) -> EventTemplate {
	EventTemplate {
		title,
		category,
		description,
		short_description,
		requirements,
		tags,
		max_participants,
		participation_fee,
	}
}

const TECH: &[EventTemplate] = &[
	event(
		"Workshop Phát triển Web với React",
		"Workshop",
		"Workshop thực hành xây dựng ứng dụng web hiện đại với React, Hook và Context API.",
		"Học React từ cơ bản đến nâng cao qua thực hành",
		&["Có kiến thức JavaScript cơ bản", "Mang laptop cá nhân", "Cài đặt Node.js và VS Code"],
		&["React", "JavaScript", "Web Development", "Frontend"],
		30,
		50000,
	),
	event(
		"Hackathon AI Challenge",
		"Competition",
		"Cuộc thi lập trình 48 giờ với chủ đề Artificial Intelligence và Machine Learning.",
		"Thử thách lập trình AI trong 48 giờ",
		&["Kinh nghiệm lập trình Python", "Hiểu biết cơ bản về AI/ML", "Làm việc nhóm 2-4 người"],
		&["AI", "Machine Learning", "Python", "Competition"],
		100,
		200000,
	),
	event(
		"Seminar Blockchain và Cryptocurrency",
		"Seminar",
		"Tìm hiểu công nghệ Blockchain, DeFi, NFT và tương lai của tiền điện tử.",
		"Khám phá thế giới Blockchain và Crypto",
		&["Quan tâm đến công nghệ", "Không yêu cầu kiến thức trước"],
		&["Blockchain", "Cryptocurrency", "DeFi", "Technology"],
		200,
		0,
	),
	event(
		"Workshop Game Development với Unity",
		"Workshop",
		"Học cách tạo game 2D và 3D với Unity Engine từ cơ bản đến nâng cao.",
		"Tạo game đầu tiên với Unity",
		&["Kiến thức C# cơ bản", "Máy tính cài Unity Hub", "Đam mê game development"],
		&["Unity", "Game Development", "C#", "3D Modeling"],
		25,
		100000,
	),
	event(
		"Tech Talk: Tương lai của Cybersecurity",
		"Seminar",
		"Các chuyên gia chia sẻ về xu hướng và thách thức trong lĩnh vực an ninh mạng.",
		"Cập nhật xu hướng Cybersecurity mới nhất",
		&["Quan tâm đến bảo mật", "Không yêu cầu kiến thức chuyên sâu"],
		&["Cybersecurity", "Information Security", "Tech Talk"],
		150,
		0,
	),
];

const SPORTS: &[EventTemplate] = &[
	event(
		"Giải bóng đá sinh viên",
		"Competition",
		"Giải đấu bóng đá thường niên dành cho sinh viên toàn trường.",
		"Giải bóng đá sinh viên quy mô lớn",
		&["Sinh viên trong trường", "Có kinh nghiệm chơi bóng đá", "Đăng ký theo đội (11 người)"],
		&["Football", "Competition", "Sports", "Tournament"],
		200,
		200000,
	),
	event(
		"Giải cầu lông mở rộng",
		"Competition",
		"Giải cầu lông cho cả nam và nữ với nhiều hạng mục thi đấu.",
		"Giải cầu lông đa hạng mục",
		&["Mang vợt cầu lông", "Giày thể thao chuyên dụng", "Đăng ký cá nhân hoặc đôi"],
		&["Badminton", "Competition", "Individual Sports"],
		80,
		50000,
	),
	event(
		"Marathon Charity Run",
		"Social",
		"Chạy marathon từ thiện gây quỹ hỗ trợ trẻ em vùng cao.",
		"Chạy marathon vì cộng đồng",
		&["Sức khỏe tốt", "Đăng ký khám sức khỏe", "Tinh thần tình nguyện"],
		&["Marathon", "Charity", "Running", "Community"],
		500,
		100000,
	),
	event(
		"Workshop Yoga và Thiền",
		"Workshop",
		"Học các bài tập yoga cơ bản và kỹ thuật thiền để giảm stress.",
		"Thư giãn với Yoga và Thiền",
		&["Mang thảm tập yoga", "Trang phục thoải mái", "Không cần kinh nghiệm"],
		&["Yoga", "Meditation", "Health", "Wellness"],
		40,
		30000,
	),
];

const CULTURE: &[EventTemplate] = &[
	event(
		"Đêm nhạc \"Những câu chuyện tuổi trẻ\"",
		"Performance",
		"Đêm nhạc kết hợp nhiều thể loại âm nhạc từ pop, rock đến dân ca.",
		"Đêm nhạc đa dạng thể loại",
		&["Mua vé trước", "Trang phục lịch sự"],
		&["Music", "Performance", "Culture", "Entertainment"],
		500,
		100000,
	),
	event(
		"Triển lãm Nhiếp ảnh Sinh viên",
		"Exhibition",
		"Triển lãm ảnh nghệ thuật của sinh viên với chủ đề \"Vẻ đẹp Hà Nội\".",
		"Triển lãm ảnh nghệ thuật sinh viên",
		&["Không yêu cầu đặc biệt", "Yêu thích nghệ thuật"],
		&["Photography", "Art", "Exhibition", "Culture"],
		300,
		0,
	),
	event(
		"Workshop Múa hiện đại",
		"Workshop",
		"Học các động tác múa hiện đại, hip-hop và K-pop dance cơ bản.",
		"Học múa hiện đại và K-pop",
		&["Trang phục thể thao", "Giày sneaker", "Tinh thần học hỏi"],
		&["Dance", "Modern Dance", "K-pop", "Performance"],
		50,
		80000,
	),
	event(
		"Buổi diễn Kịch nghệ",
		"Performance",
		"Buổi diễn kịch của các thành viên câu lạc bộ với các vở kịch nổi tiếng.",
		"Thưởng thức nghệ thuật kịch nghệ",
		&["Mua vé trước", "Đến đúng giờ"],
		&["Drama", "Theater", "Performance", "Acting"],
		200,
		50000,
	),
];

const ACADEMIC: &[EventTemplate] = &[
	event(
		"Olympic Toán học sinh viên",
		"Competition",
		"Cuộc thi toán học dành cho sinh viên với các bài toán thách thức.",
		"Thách thức trí tuệ với Olympic Toán",
		&["Kiến thức toán đại học", "Tư duy logic tốt", "Đăng ký cá nhân"],
		&["Mathematics", "Competition", "Academic", "Problem Solving"],
		100,
		30000,
	),
	event(
		"Seminar Nghiên cứu Khoa học",
		"Seminar",
		"Chia sẻ các nghiên cứu khoa học mới nhất trong các lĩnh vực khác nhau.",
		"Cập nhật nghiên cứu khoa học mới",
		&["Quan tâm nghiên cứu", "Có thể tham gia thảo luận"],
		&["Research", "Science", "Academic", "Innovation"],
		150,
		0,
	),
	event(
		"Workshop IELTS Speaking",
		"Workshop",
		"Luyện tập kỹ năng nói tiếng Anh cho kỳ thi IELTS.",
		"Nâng cao kỹ năng IELTS Speaking",
		&["Trình độ tiếng Anh trung bình", "Mang tài liệu học tập"],
		&["IELTS", "English", "Speaking", "Language"],
		30,
		150000,
	),
	event(
		"Thí nghiệm Vật lý thú vị",
		"Workshop",
		"Khám phá các hiện tượng vật lý thông qua thí nghiệm thực tế.",
		"Khám phá vật lý qua thí nghiệm",
		&["Quan tâm khoa học", "Tuân thủ an toàn phòng lab"],
		&["Physics", "Experiment", "Science", "Discovery"],
		25,
		40000,
	),
];

const VOLUNTEER: &[EventTemplate] = &[
	event(
		"Chiến dịch Làm sạch Môi trường",
		"Social",
		"Hoạt động dọn dẹp công viên, trồng cây xanh và tuyên truyền bảo vệ môi trường.",
		"Cùng nhau bảo vệ môi trường xanh",
		&["Tinh thần tình nguyện", "Trang phục phù hợp", "Mang găng tay"],
		&["Environment", "Volunteer", "Green", "Community"],
		100,
		0,
	),
	event(
		"Đêm Từ thiện \"Vì trẻ em vùng cao\"",
		"Social",
		"Buổi gala từ thiện gây quỹ hỗ trợ trẻ em vùng sâu vùng xa.",
		"Gây quỹ từ thiện cho trẻ em",
		&["Mua vé tham gia", "Tinh thần chia sẻ"],
		&["Charity", "Children", "Fundraising", "Community"],
		300,
		200000,
	),
	event(
		"Ngày Hiến máu Nhân đạo",
		"Social",
		"Tổ chức hiến máu tình nguyện cứu người và tuyên truyền về hiến máu.",
		"Hiến máu tình nguyện cứu người",
		&["Tuổi 18-60", "Sức khỏe tốt", "Đã ăn sáng đầy đủ"],
		&["Blood Donation", "Health", "Volunteer", "Humanitarian"],
		200,
		0,
	),
];

const BUSINESS: &[EventTemplate] = &[
	event(
		"Startup Pitch Competition",
		"Competition",
		"Cuộc thi thuyết trình ý tưởng khởi nghiệp dành cho sinh viên.",
		"Thuyết trình ý tưởng startup",
		&["Có ý tưởng kinh doanh", "Làm việc nhóm 3-5 người", "Chuẩn bị slide thuyết trình"],
		&["Startup", "Pitch", "Business", "Entrepreneurship"],
		60,
		100000,
	),
	event(
		"Workshop Digital Marketing 2024",
		"Workshop",
		"Học các kỹ thuật marketing online, SEO, social media marketing hiện đại.",
		"Kỹ năng Digital Marketing thiết yếu",
		&["Mang laptop", "Quan tâm đến marketing", "Tài khoản social media"],
		&["Digital Marketing", "SEO", "Social Media", "Business"],
		80,
		150000,
	),
	event(
		"Hội thảo Đầu tư Chứng khoán",
		"Seminar",
		"Hướng dẫn cơ bản về đầu tư chứng khoán, phân tích cổ phiếu và quản lý rủi ro.",
		"Kiến thức đầu tư chứng khoán cơ bản",
		&["Quan tâm đến tài chính", "Không cần kinh nghiệm đầu tư"],
		&["Investment", "Stock Market", "Finance", "Economics"],
		120,
		50000,
	),
];

/// Event templates keyed by the organizing club's category.
pub const EVENTS_BY_CLUB_CATEGORY: &[(&str, &[EventTemplate])] = &[
	("Công nghệ", TECH),
	("Thể thao", SPORTS),
	("Văn hóa", CULTURE),
	("Học thuật", ACADEMIC),
	("Tình nguyện", VOLUNTEER),
	("Kinh doanh", BUSINESS),
];

const WORKSHOP_AGENDA: &[&str] = &[
	"Đăng ký và check-in",
	"Giới thiệu và icebreaker",
	"Phần lý thuyết cơ bản",
	"Thực hành hands-on",
	"Nghỉ giải lao",
	"Thực hành nâng cao",
	"Q&A và thảo luận",
	"Tổng kết và chứng nhận",
];

/// Agenda activity lists per event kind; unknown kinds use the workshop list.
pub const AGENDAS: &[(&str, &[&str])] = &[
	("Workshop", WORKSHOP_AGENDA),
	(
		"Competition",
		&[
			"Đăng ký và check-in",
			"Giới thiệu luật thi đấu",
			"Vòng loại",
			"Nghỉ giải lao",
			"Vòng bán kết",
			"Vòng chung kết",
			"Lễ trao giải",
			"Chụp ảnh lưu niệm",
		],
	),
	(
		"Seminar",
		&[
			"Đăng ký và check-in",
			"Khai mạc và giới thiệu diễn giả",
			"Phần thuyết trình chính",
			"Thảo luận và Q&A",
			"Nghỉ giải lao",
			"Phần chia sẻ kinh nghiệm",
			"Networking",
			"Tổng kết và đánh giá",
		],
	),
	(
		"Performance",
		&[
			"Chuẩn bị và sound check",
			"Đón khách và check-in",
			"Khai mạc chương trình",
			"Phần biểu diễn chính",
			"Giải lao",
			"Phần biểu diễn đặc biệt",
			"Tương tác với khán giả",
			"Bế mạc và chụp ảnh",
		],
	),
	(
		"Exhibition",
		&[
			"Chuẩn bị triển lãm",
			"Khai mạc và giới thiệu",
			"Tham quan tự do",
			"Chia sẻ của tác giả",
			"Nghỉ giải lao",
			"Thảo luận và đánh giá",
			"Networking",
			"Bế mạc triển lãm",
		],
	),
	(
		"Social",
		&[
			"Đăng ký và check-in",
			"Icebreaker games",
			"Hoạt động chính",
			"Nghỉ giải lao và ăn nhẹ",
			"Hoạt động nhóm",
			"Chia sẻ và kết nối",
			"Chụp ảnh nhóm",
			"Tổng kết và hẹn gặp lại",
		],
	),
];

pub fn agenda_for(event_category: &str) -> &'static [&'static str] {
	AGENDAS
		.iter()
		.find(|(name, _)| *name == event_category)
		.map(|(_, items)| *items)
		.unwrap_or(WORKSHOP_AGENDA)
}

pub const VENUES: &[&str] = &[
	"Hội trường A, Đại học Bách khoa Hà Nội",
	"Phòng 301, Tòa nhà C2, ĐHBK Hà Nội",
	"Sân vận động trường ĐHBK",
	"Thư viện Tạ Quang Bửu, ĐHBK Hà Nội",
	"Phòng lab CNTT, Tòa B1",
];

pub const VIRTUAL_PLATFORMS: &[&str] = &["Zoom", "Google Meet", "Microsoft Teams"];

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::clubs::CATEGORIES;

	#[test]
	fn every_club_category_has_event_templates() {
		for category in CATEGORIES {
			let templates = EVENTS_BY_CLUB_CATEGORY
				.iter()
				.find(|(name, _)| name == category)
				.map(|(_, templates)| *templates)
				.unwrap_or_default();
			assert!(templates.len() >= 3, "{category}");
		}
	}

	#[test]
	fn agenda_lookup_falls_back_to_workshop() {
		assert_eq!(agenda_for("Performance")[0], "Chuẩn bị và sound check");
		assert_eq!(agenda_for("Fundraiser"), WORKSHOP_AGENDA);
		for (_, items) in AGENDAS {
			assert_eq!(items.len(), 8);
		}
	}
}
