fn main() -> Result<(), Box<dyn std::error::Error>> {
    lento::runtime::run()
}
