use clap::Parser;
use tsf_cli::Args;

fn main() {
    env_logger::init();
    let args = Args::parse();

    match tsf_cli::run(&args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
