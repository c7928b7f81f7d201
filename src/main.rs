fn main() {
    remspan::cli::bin::cli()
}
