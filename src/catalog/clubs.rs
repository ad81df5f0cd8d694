/// One club the seeder always creates. `member_count` is the advertised size,
/// later overwritten by the membership seeder with the real active count.
#[derive(Debug, Clone, Copy)]
pub struct ClubTemplate {
	pub name: &'static str,
	pub category: &'static str,
	pub location: &'static str,
	pub contact_email: &'static str,
	pub contact_phone: &'static str,
	pub member_count: i64,
	pub description: &'static str,
}

const fn club(
	name: &'static str,
	category: &'static str,
	location: &'static str,
	contact_email: &'static str,
	contact_phone: &'static str,
	member_count: i64,
	description: &'static str,
) -> ClubTemplate {
	ClubTemplate {
		name,
		category,
		location,
		contact_email,
		contact_phone,
		member_count,
		description,
	}
}

pub const CLUBS: &[ClubTemplate] = &[
	// Công nghệ
	club(
		"CLB Công nghệ Thông tin BKHN",
		"Công nghệ",
		"Phòng Lab CNTT, Tòa A",
		"tech.club@bkhn.edu.vn",
		"+84901234567",
		145,
		"Câu lạc bộ dành cho sinh viên yêu thích lập trình, AI, và các công nghệ mới. Tổ chức workshop, hackathon và các dự án công nghệ.",
	),
	club(
		"CLB Trí tuệ Nhân tạo",
		"Công nghệ",
		"Phòng AI Lab, Tòa B",
		"ai.club@bkhn.edu.vn",
		"+84901234568",
		89,
		"Nghiên cứu và phát triển các ứng dụng AI, Machine Learning, Deep Learning. Tham gia các cuộc thi quốc tế về AI.",
	),
	club(
		"CLB Blockchain & Cryptocurrency",
		"Công nghệ",
		"Phòng Innovation Hub",
		"blockchain@bkhn.edu.vn",
		"+84901234569",
		67,
		"Tìm hiểu công nghệ Blockchain, phát triển DApps, nghiên cứu về cryptocurrency và FinTech.",
	),
	club(
		"CLB Game Development",
		"Công nghệ",
		"Phòng Game Lab, Tòa C",
		"gamedev@bkhn.edu.vn",
		"+84901234570",
		78,
		"Phát triển game indie, học Unity, Unreal Engine, và các công nghệ game development hiện đại.",
	),
	club(
		"CLB Cyber Security",
		"Công nghệ",
		"Phòng Security Lab",
		"cybersec@bkhn.edu.vn",
		"+84901234571",
		92,
		"Nghiên cứu an toàn thông tin, ethical hacking, penetration testing và bảo mật mạng.",
	),
	// Thể thao
	club(
		"CLB Bóng đá Nam BKHN",
		"Thể thao",
		"Sân bóng đá trường",
		"football.men@bkhn.edu.vn",
		"+84901234572",
		156,
		"Câu lạc bộ bóng đá nam với đội hình mạnh, thường xuyên tham gia các giải đấu liên trường và quốc gia.",
	),
	club(
		"CLB Bóng đá Nữ BKHN",
		"Thể thao",
		"Sân bóng đá trường",
		"football.women@bkhn.edu.vn",
		"+84901234573",
		89,
		"Đội bóng đá nữ năng động, tham gia tích cực các giải đấu và hoạt động thể thao nữ.",
	),
	club(
		"CLB Bóng chuyền",
		"Thể thao",
		"Nhà thi đấu đa năng",
		"volleyball@bkhn.edu.vn",
		"+84901234574",
		134,
		"CLB bóng chuyền với cả đội nam và nữ, tham gia các giải đấu trong và ngoài trường.",
	),
	club(
		"CLB Cầu lông",
		"Thể thao",
		"Sân cầu lông trong nhà",
		"badminton@bkhn.edu.vn",
		"+84901234575",
		167,
		"Câu lạc bộ cầu lông với nhiều cấp độ từ người mới bắt đầu đến chuyên nghiệp.",
	),
	club(
		"CLB Bóng rổ",
		"Thể thao",
		"Sân bóng rổ ngoài trời",
		"basketball@bkhn.edu.vn",
		"+84901234576",
		98,
		"CLB bóng rổ năng động, tổ chức các trận đấu giao hữu và tham gia giải đấu liên trường.",
	),
	club(
		"CLB Taekwondo",
		"Thể thao",
		"Phòng tập võ",
		"taekwondo@bkhn.edu.vn",
		"+84901234577",
		76,
		"Luyện tập võ thuật Taekwondo, tham gia thi đấu và biểu diễn trong các sự kiện trường.",
	),
	// Văn hóa
	club(
		"CLB Âm nhạc BKHN",
		"Văn hóa",
		"Phòng âm nhạc, Tòa văn hóa",
		"music@bkhn.edu.vn",
		"+84901234578",
		123,
		"Câu lạc bộ âm nhạc đa dạng thể loại, từ nhạc cổ điển, pop đến rock và electronic.",
	),
	club(
		"CLB Múa hiện đại",
		"Văn hóa",
		"Phòng tập múa",
		"dance@bkhn.edu.vn",
		"+84901234579",
		145,
		"Múa hiện đại, hip-hop, K-pop dance và các thể loại múa đương đại khác.",
	),
	club(
		"CLB Kịch nghệ",
		"Văn hóa",
		"Hội trường lớn",
		"drama@bkhn.edu.vn",
		"+84901234580",
		87,
		"Sân chơi cho những người yêu thích diễn xuất, kịch nói, và nghệ thuật sân khấu.",
	),
	club(
		"CLB Nhiếp ảnh",
		"Văn hóa",
		"Studio nhiếp ảnh",
		"photography@bkhn.edu.vn",
		"+84901234581",
		156,
		"Đam mê chụp ảnh, chỉnh sửa ảnh, và khám phá vẻ đẹp qua ống kính máy ảnh.",
	),
	club(
		"CLB Văn học",
		"Văn hóa",
		"Phòng đọc sách",
		"literature@bkhn.edu.vn",
		"+84901234582",
		67,
		"Yêu thích văn học, thơ ca, sáng tác và chia sẻ những tác phẩm văn học.",
	),
	// Học thuật
	club(
		"CLB Toán học",
		"Học thuật",
		"Phòng Toán, Tòa A",
		"math@bkhn.edu.vn",
		"+84901234583",
		89,
		"Nghiên cứu toán học, giải toán olympic và ứng dụng toán học trong thực tế.",
	),
	club(
		"CLB Vật lý",
		"Học thuật",
		"Phòng thí nghiệm Vật lý",
		"physics@bkhn.edu.vn",
		"+84901234584",
		78,
		"Thí nghiệm vật lý, nghiên cứu khoa học và tham gia các cuộc thi vật lý.",
	),
	club(
		"CLB Hóa học",
		"Học thuật",
		"Phòng thí nghiệm Hóa học",
		"chemistry@bkhn.edu.vn",
		"+84901234585",
		92,
		"Thí nghiệm hóa học, nghiên cứu hóa học ứng dụng và an toàn phòng thí nghiệm.",
	),
	club(
		"CLB Tiếng Anh",
		"Học thuật",
		"Phòng ngoại ngữ",
		"english@bkhn.edu.vn",
		"+84901234586",
		201,
		"Luyện tập tiếng Anh, IELTS, TOEFL và giao lưu với sinh viên quốc tế.",
	),
	// Tình nguyện
	club(
		"CLB Tình nguyện Xanh",
		"Tình nguyện",
		"Phòng Đoàn Thanh niên",
		"green@bkhn.edu.vn",
		"+84901234587",
		178,
		"Tập trung vào các hoạt động bảo vệ môi trường, làm sạch bãi biển, trồng cây xanh.",
	),
	club(
		"CLB Từ thiện Nhân ái",
		"Tình nguyện",
		"Phòng hoạt động xã hội",
		"charity@bkhn.edu.vn",
		"+84901234588",
		234,
		"Hoạt động từ thiện, hỗ trợ trẻ em vùng sâu vùng xa, người già neo đơn.",
	),
	club(
		"CLB Hiến máu Nhân đạo",
		"Tình nguyện",
		"Trung tâm y tế",
		"blooddonate@bkhn.edu.vn",
		"+84901234589",
		156,
		"Tổ chức các đợt hiến máu tình nguyện, tuyên truyền về hiến máu cứu người.",
	),
	// Kinh doanh
	club(
		"CLB Khởi nghiệp BKHN",
		"Kinh doanh",
		"Innovation Hub",
		"startup@bkhn.edu.vn",
		"+84901234590",
		167,
		"Hỗ trợ sinh viên khởi nghiệp, tìm hiểu về startup, pitch idea và networking.",
	),
	club(
		"CLB Marketing & Brand",
		"Kinh doanh",
		"Phòng Marketing Lab",
		"marketing@bkhn.edu.vn",
		"+84901234591",
		134,
		"Học hỏi về marketing, branding, social media marketing và digital marketing.",
	),
	club(
		"CLB Đầu tư Chứng khoán",
		"Kinh doanh",
		"Phòng Tài chính",
		"investment@bkhn.edu.vn",
		"+84901234592",
		89,
		"Tìm hiểu về thị trường chứng khoán, phân tích tài chính và đầu tư thông minh.",
	),
];

/// Every club category.
#[cfg(test)]
pub const CATEGORIES: &[&str] = &[
	"Công nghệ",
	"Thể thao",
	"Văn hóa",
	"Học thuật",
	"Tình nguyện",
	"Kinh doanh",
];
