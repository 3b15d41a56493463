fn main() {
    relkit::app::cli::export::run();
}
