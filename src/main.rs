// src/main.rs

use exerun::{cli, logging};

#[tokio::main]
async fn main() {
    let args = match cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help / --version land on stdout and are not failures.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("exerun error: {err:?}");
        std::process::exit(1);
    }

    std::process::exit(exerun::run(args).await);
}
