use super::{
    create_comment::{validate_rate, validate_text},
    prelude::*,
};

#[derive(Debug, Clone, Default)]
pub struct EditComment {
    pub text: Option<String>,
    pub rate: Option<i8>,
}

/// Update the text and/or the rating of a comment.
///
/// A new text is recorded in the changelog of the comment.
/// Both writes must be executed within a single transaction.
pub fn edit_comment<R>(repo: &R, comment_id: &str, edit: EditComment) -> Result<Comment>
where
    R: CommentRepo + CommentChangelogRepo,
{
    let EditComment { text, rate } = edit;
    let text = text.as_deref().map(validate_text).transpose()?;
    let rate = rate.map(validate_rate).transpose()?;
    let mut comment = repo
        .try_load_comment(comment_id)?
        .ok_or(Error::CommentDoesNotExist)?;
    let mut modified = false;
    if let Some(text) = text.filter(|text| *text != comment.text) {
        let before = std::mem::replace(&mut comment.text, text);
        let entry = ChangelogEntry {
            created_at: Timestamp::now(),
            before,
            after: comment.text.clone(),
        };
        repo.append_changelog_entry(comment_id, entry)?;
        modified = true;
    }
    if let Some(rate) = rate.filter(|rate| *rate != comment.rate) {
        comment.rate = rate;
        modified = true;
    }
    if modified {
        log::debug!("Updating comment {}", comment.id);
        repo.update_comment(&comment)?;
    } else {
        log::debug!("Comment {} is unchanged", comment.id);
    }
    Ok(comment)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    fn edit_text(text: &str) -> EditComment {
        EditComment {
            text: Some(text.into()),
            rate: None,
        }
    }

    #[test]
    fn record_text_changes_in_the_changelog() {
        let db = MockDb::default();
        db.create_comment(comment("c1", "u1", "p1")).unwrap();

        edit_comment(&db, "c1", edit_text("second")).unwrap();
        let edited = edit_comment(&db, "c1", edit_text("third")).unwrap();
        assert_eq!("third", edited.text);
        assert_eq!(edited, db.load_comment("c1").unwrap());

        let changelog = db.load_changelog_of_comment("c1").unwrap();
        assert_eq!(2, changelog.len());
        assert_eq!("comment c1", changelog[0].before);
        assert_eq!("second", changelog[0].after);
        assert_eq!("second", changelog[1].before);
        assert_eq!("third", changelog[1].after);
    }

    #[test]
    fn change_rating_without_changelog_entry() {
        let db = MockDb::default();
        db.create_comment(comment("c1", "u1", "p1")).unwrap();
        let edited = edit_comment(
            &db,
            "c1",
            EditComment {
                text: None,
                rate: Some(5),
            },
        )
        .unwrap();
        assert_eq!(RatingValue::from(5), edited.rate);
        assert_eq!(RatingValue::from(5), db.load_comment("c1").unwrap().rate);
        assert!(db.changelog.borrow().is_empty());
    }

    #[test]
    fn unchanged_text_is_not_recorded() {
        let db = MockDb::default();
        db.create_comment(comment("c1", "u1", "p1")).unwrap();
        edit_comment(&db, "c1", edit_text(" comment c1 ")).unwrap();
        edit_comment(&db, "c1", EditComment::default()).unwrap();
        assert!(db.changelog.borrow().is_empty());
    }

    #[test]
    fn validate_before_writing() {
        let db = MockDb::default();
        let original = comment("c1", "u1", "p1");
        db.create_comment(original.clone()).unwrap();
        assert!(matches!(
            edit_comment(&db, "c1", edit_text("")),
            Err(Error::EmptyComment)
        ));
        assert!(matches!(
            edit_comment(
                &db,
                "c1",
                EditComment {
                    text: Some("valid".into()),
                    rate: Some(9),
                }
            ),
            Err(Error::RatingValue)
        ));
        assert_eq!(original, db.load_comment("c1").unwrap());
        assert!(db.changelog.borrow().is_empty());
    }

    #[test]
    fn unknown_comment() {
        let db = MockDb::default();
        assert!(matches!(
            edit_comment(&db, "c1", edit_text("text")),
            Err(Error::CommentDoesNotExist)
        ));
    }
}
