fn main() {
    chunkgraph::cli::run();
}
