mod model;
mod test_auth;
mod test_error;
mod utils;
