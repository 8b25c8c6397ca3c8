use anyhow::Result;
use cdb_application::prelude as flows;
use cdb_boundary as json;
use cdb_core::{
    entities::{Comment, CommentView},
    repositories::UserRepo as _,
    usecases,
};
use cdb_db_sqlite::Connections;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Write};

use crate::cfg::Cfg;

#[derive(Debug, Parser)]
#[command(name = "commentdb", version, about = "Manage user comments on projects")]
struct Cli {
    /// SQLite database file, overrides DATABASE_URL
    #[arg(long, value_name = "URL", global = true)]
    db_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Register a new user
    CreateUser {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        photo: Option<String>,
    },
    /// Remove a user, their comments are kept
    DeleteUser { id: String },
    /// Write a new comment on a project
    CreateComment {
        #[arg(long)]
        uid: String,
        #[arg(long)]
        pid: String,
        #[arg(long)]
        rate: i8,
        comment: String,
    },
    /// Change the text and/or the rating of a comment
    EditComment {
        cid: String,
        #[arg(long)]
        comment: Option<String>,
        #[arg(long)]
        rate: Option<i8>,
    },
    /// List all comments of a user
    CommentsByUser { uid: String },
    /// List all comments on a project
    CommentsByProject { pid: String },
    /// Show the edit history of a comment
    Changelog { cid: String },
    /// Show the author of a comment
    Author { cid: String },
}

pub fn run() -> Result<()> {
    if let Err(err) = dotenvy::dotenv() {
        log::debug!("No .env file loaded: {err}");
    }
    let args = Cli::parse();
    let mut cfg = Cfg::from_env_or_default();
    if let Some(db_url) = args.db_url {
        cfg.db_url = db_url;
    }
    log::info!("Connecting to SQLite database: {}", cfg.db_url);
    let connections = Connections::init(&cfg.db_url, cfg.db_connection_pool_size)?;
    cdb_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;
    exec(&connections, args.command, &mut io::stdout().lock())
}

fn exec(connections: &Connections, command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::CreateUser {
            id,
            name,
            email,
            photo,
        } => {
            let new_user = usecases::NewUser {
                id,
                name,
                email,
                photo,
            };
            let user = flows::create_user(connections, new_user)?;
            print_json(out, &json::User::from(user))
        }
        Command::DeleteUser { id } => {
            flows::delete_user(connections, &id)?;
            Ok(())
        }
        Command::CreateComment {
            uid,
            pid,
            rate,
            comment,
        } => {
            let new_comment = json::NewComment {
                uid,
                pid,
                comment,
                rate,
            };
            let comment = flows::create_comment(connections, adapters::new_comment(new_comment))?;
            print_comment(out, connections, comment)
        }
        Command::EditComment { cid, comment, rate } => {
            let edit = json::EditComment { comment, rate };
            let comment = flows::edit_comment(connections, &cid, adapters::edit_comment(edit))?;
            print_comment(out, connections, comment)
        }
        Command::CommentsByUser { uid } => {
            let db = connections.shared()?;
            let views = usecases::find_comments_by_user(&db, &uid)?;
            print_json(out, &views.into_iter().map(json::Comment::from).collect::<Vec<_>>())
        }
        Command::CommentsByProject { pid } => {
            let db = connections.shared()?;
            let views = usecases::find_comments_by_project(&db, &pid)?;
            print_json(out, &views.into_iter().map(json::Comment::from).collect::<Vec<_>>())
        }
        Command::Changelog { cid } => {
            let db = connections.shared()?;
            let changelog = usecases::load_comment_changelog(&db, &cid)?;
            print_json(
                out,
                &changelog
                    .into_iter()
                    .map(json::ChangelogEntry::from)
                    .collect::<Vec<_>>(),
            )
        }
        Command::Author { cid } => {
            let db = connections.shared()?;
            let author = usecases::load_comment_author_by_id(&db, &cid)?;
            print_json(out, &json::Author::from(author))
        }
    }
}

fn print_comment(
    out: &mut impl Write,
    connections: &Connections,
    comment: Comment,
) -> Result<()> {
    let author = connections.shared()?.try_get_user(comment.user_id.as_str())?;
    print_json(
        out,
        &json::Comment::from(CommentView::new(comment, author.as_ref())),
    )
}

fn print_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

mod adapters {
    use super::*;

    pub fn new_comment(c: json::NewComment) -> usecases::NewComment {
        let json::NewComment {
            uid,
            pid,
            comment,
            rate,
        } = c;
        usecases::NewComment {
            user_id: uid,
            project_id: pid,
            text: comment,
            rate,
        }
    }

    pub fn edit_comment(e: json::EditComment) -> usecases::EditComment {
        let json::EditComment { comment, rate } = e;
        usecases::EditComment {
            text: comment,
            rate,
        }
    }
}
