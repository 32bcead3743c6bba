use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    carehub_lib::init_tracing();

    let command = match carehub_lib::parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("carehub: {e}");
            eprintln!("usage: carehub [role] [view] [query] | carehub catalog <domain> | carehub ask <prompt>");
            return ExitCode::FAILURE;
        }
    };

    match carehub_lib::run(command).await {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("carehub failed: {e}");
            ExitCode::FAILURE
        }
    }
}
