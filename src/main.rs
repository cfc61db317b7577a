use stickerboard::cli::run;
use stickerboard::error::BoardError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // No-op outside Windows consoles
    let _ = enable_ansi_support::enable_ansi_support();

    if let Err(e) = run() {
        let is_user_error = e
            .downcast_ref::<BoardError>()
            .is_some_and(BoardError::is_user_error);

        if is_user_error {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }

        eprintln!("Internal error: {}", e);
        // Show error chain if available
        let mut causes = e.chain().skip(1).peekable();
        if causes.peek().is_some() {
            eprintln!("\nCaused by:");
            for (depth, cause) in causes.enumerate() {
                eprintln!("{:indent$}  {}", "", cause, indent = depth);
            }
        }
        std::process::exit(2);
    }
}
