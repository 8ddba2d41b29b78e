/// Loads a `.env` file from the working directory, if there is one.
///
/// Must run before the command line is parsed so that options backed by
/// environment variables see the values from the file.
pub fn init() {
    dotenv::dotenv().ok();
}
