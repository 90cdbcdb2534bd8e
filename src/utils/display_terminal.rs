//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 시 바인드 주소와 사용 중인 사용자 API를 박스 형태로 출력합니다.

const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목 문자열을 만듭니다
///
/// 텍스트는 중앙 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                 dashgo. admin                    ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn format_boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        border = border,
        title = title,
        width = BOX_WIDTH
    )
}

/// 들여쓰기된 트리 항목 한 줄을 만듭니다
pub fn format_sub_task(name: &str, status: &str) -> String {
    format!("   ├─ {}: {}", name, status)
}

/// 서버 시작 요약을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  dashgo. admin                   ║
/// ╚══════════════════════════════════════════════════╝
///    ├─ Listening: http://127.0.0.1:8080
///    ├─ Users API: mock
///    ├─ Workers: 2
/// ```
pub fn print_startup_summary(bind_address: &str, users_api: &str, workers: usize) {
    println!();
    println!("{}", format_boxed_title("dashgo. admin"));
    println!("{}", format_sub_task("Listening", &format!("http://{}", bind_address)));
    println!("{}", format_sub_task("Users API", users_api));
    println!("{}", format_sub_task("Workers", &workers.to_string()));
    println!();
}
