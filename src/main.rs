fn main() {
    if let Err(e) = riot_mcp::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
