//! Demo authentication.
//!
//! There are no accounts: any non-empty email & password pair logs in as the demo
//! administrator. Issued tokens are never stored or checked.

use rand::Rng;

use crate::{
    model::auth::{LoginDto, LoginResponseDto, UserDto},
    server::{
        error::{auth::AuthError, AppError},
        model::user::{User, DEMO_USER_EMAIL},
    },
};

const TOKEN_PREFIX: &str = "demo-token-";

pub struct AuthService;

impl AuthService {
    /// Logs in with the provided credentials.
    ///
    /// # Returns
    /// - `Ok(LoginResponseDto)` - Fresh token & the demo user carrying the submitted email
    /// - `Err(AppError::AuthErr(AuthError::InvalidCredentials))` - Email or password is empty
    pub fn login(credentials: LoginDto) -> Result<LoginResponseDto, AppError> {
        if credentials.email.is_empty() || credentials.password.is_empty() {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(LoginResponseDto {
            token: Self::generate_token(),
            user: User::demo(credentials.email).into_dto(),
        })
    }

    /// The user every session belongs to.
    pub fn current_user() -> UserDto {
        User::demo(DEMO_USER_EMAIL).into_dto()
    }

    fn generate_token() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";
        const TOKEN_LENGTH: usize = 32;

        let mut rng = rand::rng();

        let random: String = (0..TOKEN_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect();

        format!("{}{}", TOKEN_PREFIX, random)
    }
}
