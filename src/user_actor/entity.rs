use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate};

impl Entity for User {
    const KIND: &'static str = "user";

    type Id = String;
    type CreateParams = UserCreate;
    type Action = ();
    type ActionResult = ();

    /// Creates a new User from creation parameters.
    ///
    /// # Errors
    /// An email address is required.
    fn from_create_params(id: String, params: UserCreate) -> Result<Self, String> {
        if params.email.trim().is_empty() {
            return Err("Email required".to_string());
        }
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
        })
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
