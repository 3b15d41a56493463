fn main() {
    relkit::app::cli::publish::run();
}
