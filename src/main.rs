fn main() -> Result<(), Box<dyn std::error::Error>> {
    reelscope::run()
}
