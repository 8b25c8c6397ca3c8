///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        email -> Text,
        photo -> Nullable<Text>,
    }
}

///////////////////////////////////////////////////////////////////////
// Comments
///////////////////////////////////////////////////////////////////////

table! {
    comments (rowid) {
        rowid -> BigInt,
        cid -> Text,
        uid -> Text,
        pid -> Text,
        created_at -> BigInt,
        comment -> Text,
        rate -> SmallInt,
    }
}

table! {
    comment_changelog (rowid) {
        rowid -> BigInt,
        parent_rowid -> BigInt,
        created_at -> BigInt,
        before -> Text,
        after -> Text,
    }
}

joinable!(comment_changelog -> comments (parent_rowid));

allow_tables_to_appear_in_same_query!(comments, comment_changelog);
