use prstats::run_main;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let status = run_main().await?;

    // Exit with appropriate code
    let exit_code = status.exit_code();
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
