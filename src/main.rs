fn main() -> Result<(), Box<dyn std::error::Error>> {
    fractal_voyager::voyage_controller()
}
