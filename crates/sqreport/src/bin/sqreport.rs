fn main() {
    if let Err(err) = sqreport::run() {
        eprintln!("{}", sqreport::format_error(&err));
        std::process::exit(1);
    }
}
