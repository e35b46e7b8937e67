// ==========================================
// 缺陷登记系统 - 命令行入口
// ==========================================
// 用法:
//   defect-tracker <command> [json_body]
//
// 示例:
//   defect-tracker create_defect '{"qr_code":"A1","defect_type":"scratch","operation":"paint"}'
//   defect-tracker get_stats_by_shift
//
// 数据库路径: DEFECT_TRACKER_DB_PATH 或用户数据目录
// 输出: stdout 打印 JSON 响应体;非 2xx 时以非零码退出
// ==========================================

use anyhow::{anyhow, Context};
use defect_tracker::app::{dispatch, get_default_db_path, AppState, Command};

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    defect_tracker::logging::init();

    let mut args = std::env::args().skip(1);
    let command = match args.next() {
        Some(c) => c,
        None => {
            let names: Vec<&str> = Command::ALL.iter().map(|c| c.name()).collect();
            return Err(anyhow!(
                "缺少命令参数\n用法: defect-tracker <command> [json_body]\n可用命令: {}",
                names.join(", ")
            ));
        }
    };
    let body = args.next();

    // 需要请求体的命令在打开数据库前即拒绝
    if let Ok(parsed) = command.parse::<Command>() {
        if parsed.takes_body() && body.is_none() {
            return Err(anyhow!(
                "命令 {} 需要 JSON 请求体\n用法: defect-tracker {} '<json_body>'",
                parsed,
                parsed
            ));
        }
    }

    tracing::info!("{} v{}", defect_tracker::APP_NAME, defect_tracker::VERSION);

    let db_path = get_default_db_path();
    tracing::info!("使用数据库: {}", db_path);

    let state = AppState::new(db_path)
        .map_err(|e| anyhow!(e))
        .context("无法初始化AppState")?;

    let response = dispatch(&state, &command, body.as_deref());
    println!("{}", response.body);

    if !response.is_success() {
        tracing::warn!(status = response.status, command = %command, "命令执行失败");
        std::process::exit(1);
    }

    Ok(())
}
