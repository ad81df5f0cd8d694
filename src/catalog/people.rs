pub const FAMILY_NAMES: &[&str] = &[
	"Nguyễn", "Trần", "Lê", "Phạm", "Hoàng", "Huỳnh", "Võ", "Vũ", "Đặng", "Bùi", "Đỗ", "Hồ",
	"Ngô", "Dương", "Lý", "Mai", "Trinh", "Lưu", "Cao", "Trương", "Phan", "Tạ", "Lâm", "Đinh",
	"Tôn", "Bạch", "Quách", "Châu", "Ông", "Lục",
];

pub const MIDDLE_NAMES: &[&str] = &[
	"Văn", "Thị", "Thành", "Minh", "Hoàng", "Đức", "Quốc", "Anh", "Hải", "Hữu", "Ngọc", "Thủy",
	"Kim", "Xuân", "Duy", "Bảo", "Khánh", "Lan", "Linh", "My",
];

pub const GIVEN_NAMES: &[&str] = &[
	"An", "Bình", "Cao", "Đức", "Em", "Giang", "Hoa", "Khải", "Linh", "Mai", "Nam", "Oanh",
	"Phúc", "Quang", "Sơn", "Tam", "Uyên", "Vy", "Xuân", "Yến", "Bảo", "Chi", "Đạt", "Huy",
	"Khoa", "Long", "Nhật", "Phong", "Quân", "Tùng",
];

pub const DEPARTMENTS: &[&str] = &[
	"CNTT", "KTMT", "KHMT", "ATTT", "KTPM", "TTNT", "DTPT", "KTTT", "CNPM", "HEHH", "KDQT",
	"QTKD", "KTCK", "TCNH", "XHKD", "QLCS", "TCKT", "TTQT", "NVKD", "QLNN",
];

pub const UNIVERSITIES: &[&str] = &[
	"Đại học Bách khoa Hà Nội",
	"Đại học Quốc gia Hà Nội",
	"Đại học Kinh tế Quốc dân",
	"Đại học Ngoại thương",
	"Đại học Công nghệ",
	"Đại học Sư phạm Hà Nội",
	"Đại học Y Hà Nội",
	"Đại học Luật Hà Nội",
];

pub const INTERESTS: &[&str] = &[
	"Lập trình", "Công nghệ", "Thể thao", "Âm nhạc", "Du lịch", "Đọc sách", "Nhiếp ảnh", "Nấu ăn",
	"Phim ảnh", "Game", "Nghệ thuật", "Khoa học", "Tình nguyện", "Kinh doanh", "Marketing",
	"Design", "Blockchain", "AI",
];

pub const GENDERS: &[&str] = &["Nam", "Nữ", "Khác"];

/// Bcrypt hash shared by every seeded account.
pub const SEED_PASSWORD_HASH: &str = "$2b$12$LQv3c1yqBwdVHdDhzXCZl.j8kF9QzMKlGqE3gOQwHzHzFqZyK9tI2";

pub const STUDENT_EMAIL_DOMAIN: &str = "student.university.edu.vn";

pub struct AdminTemplate {
	pub email: &'static str,
	pub full_name: &'static str,
	pub phone: &'static str,
	/// Key for the profile picture URL.
	pub picture_key: &'static str,
	pub bio: &'static str,
	pub birth: (i32, u8, u8),
	pub gender: &'static str,
	pub linkedin: &'static str,
}

pub const ADMINS: &[AdminTemplate] = &[
	AdminTemplate {
		email: "admin@clubsystem.edu.vn",
		full_name: "Nguyễn Văn Quân",
		phone: "+84901000001",
		picture_key: "admin1",
		bio: "Quản trị viên hệ thống quản lý câu lạc bộ sinh viên",
		birth: (1990, 1, 15),
		gender: "Nam",
		linkedin: "https://linkedin.com/in/admin-system",
	},
	AdminTemplate {
		email: "clubs.admin@clubsystem.edu.vn",
		full_name: "Trần Thị Linh",
		phone: "+84901000002",
		picture_key: "admin2",
		bio: "Quản trị viên phụ trách các hoạt động câu lạc bộ",
		birth: (1991, 3, 22),
		gender: "Nữ",
		linkedin: "https://linkedin.com/in/clubs-admin",
	},
];

pub const HOME_ADDRESS: &str = "Hà Nội, Việt Nam";

/// Student bios; `interests` must not be empty.
pub fn bio_options(year_of_study: u8, department: &str, university: &str, interests: &[&str]) -> [String; 5] {
	let first = interests.first().copied().unwrap_or("Công nghệ");
	let second = interests.get(1).copied().unwrap_or("tình nguyện");
	let top_two = interests.iter().take(2).copied().collect::<Vec<_>>().join(", ");
	[
		format!("Sinh viên năm {year_of_study} chuyên ngành {department}. Yêu thích {top_two}."),
		format!("Đam mê {first} và các hoạt động {second}."),
		format!(
			"Học {department} tại {university}. Quan tâm đến {}.",
			interests.join(", ")
		),
		format!("Sinh viên năm {year_of_study}, thích khám phá {first} và kết bạn."),
		format!("Yêu thích học hỏi và tham gia các hoạt động {first} cùng bạn bè."),
	]
}

pub const MEMBERSHIP_REMOVAL_REASONS: &[&str] = &[
	"Vi phạm quy định câu lạc bộ",
	"Không tham gia hoạt động lâu dài",
	"Yêu cầu rời khỏi câu lạc bộ",
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn single_interest_bio_falls_back_to_volunteering() {
		let bios = bio_options(2, "CNTT", UNIVERSITIES[0], &["Game"]);
		assert_eq!(bios[1], "Đam mê Game và các hoạt động tình nguyện.");
		assert_eq!(bios[0], "Sinh viên năm 2 chuyên ngành CNTT. Yêu thích Game.");
	}
}
