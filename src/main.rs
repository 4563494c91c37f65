fn main() {
    if let Err(e) = seawater_polynomials::adapters::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
