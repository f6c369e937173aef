fn main() {
    // Compile lalrpop grammar files under src/
    lalrpop::process_root().unwrap();
}
