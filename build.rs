fn main() {
    // Build metadata (version, git hash, rustc) for `dualpath --version`
    built::write_built_file().expect("Failed to acquire build-time information");
}
