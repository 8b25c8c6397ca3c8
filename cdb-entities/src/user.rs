use crate::id::*;

/// Avatar for users without a picture of their own.
pub const DEFAULT_PHOTO_URL: &str = "/images/default-avatar.png";

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id    : Id,
    pub name  : String,
    pub email : String,
    pub photo : Option<String>,
}

impl User {
    /// The URL of the user's picture.
    ///
    /// Falls back to [`DEFAULT_PHOTO_URL`] if no picture has been
    /// uploaded, i.e. every existing user has a photo URL.
    pub fn photo_url(&self) -> &str {
        self.photo
            .as_deref()
            .map(str::trim)
            .filter(|photo| !photo.is_empty())
            .unwrap_or(DEFAULT_PHOTO_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(photo: Option<&str>) -> User {
        User {
            id: "u1".into(),
            name: "Jane".into(),
            email: "jane@example.com".into(),
            photo: photo.map(Into::into),
        }
    }

    #[test]
    fn photo_url_of_user_with_photo() {
        assert_eq!("u1.png", user(Some("u1.png")).photo_url());
    }

    #[test]
    fn photo_url_falls_back_to_default() {
        assert_eq!(DEFAULT_PHOTO_URL, user(None).photo_url());
        assert_eq!(DEFAULT_PHOTO_URL, user(Some(" ")).photo_url());
    }
}
