use todoview::cli;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}
