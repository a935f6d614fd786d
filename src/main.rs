fn main() {
    if let Err(e) = community_stats::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
