const SOCIAL_ANSWERS: &[&str] = &[
	"Tôi muốn gặp gỡ và kết nối với nhiều bạn mới",
	"Sự kiện xã hội giúp tôi thư giãn sau thời gian học tập",
	"Thích tham gia các hoạt động vui vẻ cùng cộng đồng",
];

/// Motivation answers by event kind. Unknown kinds answer like a social event.
pub fn motivation_answers(event_category: &str) -> &'static [&'static str] {
	match event_category {
		"Workshop" => &[
			"Tôi muốn học thêm kỹ năng mới từ workshop này",
			"Workshop này phù hợp với mục tiêu phát triển nghề nghiệp của tôi",
			"Tôi quan tâm đến chủ đề và muốn trao đổi với các chuyên gia",
		],
		"Seminar" => &[
			"Chủ đề seminar rất thú vị và có ích cho công việc",
			"Tôi muốn cập nhật kiến thức mới nhất trong lĩnh vực này",
			"Được nghe chia sẻ từ các diễn giả có kinh nghiệm",
		],
		"Competition" => &[
			"Tôi muốn thử thách bản thân trong cuộc thi này",
			"Đây là cơ hội tốt để thể hiện năng lực",
			"Tôi yêu thích tinh thần cạnh tranh và học hỏi",
		],
		"Fundraiser" => &[
			"Tôi muốn đóng góp cho hoạt động thiện nguyện",
			"Ủng hộ mục đích ý nghĩa của chương trình",
			"Muốn tham gia giúp đỡ cộng đồng",
		],
		_ => SOCIAL_ANSWERS,
	}
}

pub const SPECIAL_REQUIREMENTS: &[&str] = &[
	"Không có yêu cầu đặc biệt",
	"Cần hỗ trợ dinh dưỡng chay",
	"Có dị ứng với một số loại thực phẩm",
	"Cần hỗ trợ di chuyển",
	"Yêu cầu chỗ ngồi gần sân khấu",
	"Cần bãi đỗ xe gần nhất",
];

pub const DIETARY_PREFERENCES: &[&str] = &["Không", "Chay", "Halal", "Không có sữa", "Không có gluten"];

pub const EMERGENCY_CONTACT_NAMES: &[&str] = &[
	"Nguyễn Văn An",
	"Trần Thị Bình",
	"Lê Văn Cường",
	"Phạm Thị Dung",
	"Hoàng Văn Em",
	"Vũ Thị Phương",
	"Đặng Văn Giang",
	"Bùi Thị Hoa",
	"Ngô Văn Inh",
	"Dương Thị Kim",
	"Lý Văn Long",
	"Tô Thị Mai",
];

pub const EMERGENCY_RELATIONSHIPS: &[&str] = &["Cha", "Mẹ", "Anh/Chị", "Vợ/Chồng", "Bạn thân", "Người thân"];

pub const PAYMENT_METHODS: &[&str] = &["credit_card", "bank_transfer", "cash", "digital_wallet"];

pub const CANCELLATION_REASONS: &[&str] = &[
	"Có việc đột xuất không thể tham gia",
	"Thay đổi lịch trình cá nhân",
	"Vấn đề sức khỏe",
	"Không phù hợp với nội dung sự kiện",
	"Lý do tài chính",
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unknown_event_kinds_answer_like_social_events() {
		assert_eq!(motivation_answers("Exhibition"), SOCIAL_ANSWERS);
		assert_ne!(motivation_answers("Workshop"), SOCIAL_ANSWERS);
	}
}
