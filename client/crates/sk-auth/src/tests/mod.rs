
use crate::SignUpRequest;

pub(crate) fn sign_up_request(password: &str, confirm_password: &str) -> SignUpRequest {
    SignUpRequest {
        name: "Ann".to_string(),
        email: "ann@x.com".to_string(),
        password: password.to_string(),
        confirm_password: confirm_password.to_string(),
    }
}
