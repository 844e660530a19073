fn main() {
    if let Err(err) = moodlens_lib::run() {
        eprintln!("moodlens: {err:#}");
        std::process::exit(1);
    }
}
