//! comment-ranker - vote-based comment ordering CLI
//!
//! ## Quick Start
//!
//! ```bash
//! # Rank comments by how divisive they are
//! comment-ranker rank comments.json --mode divisive
//!
//! # Show a group's representative comments
//! comment-ranker represent --comments comments.json --group group0.json
//!
//! # Print the embed iframe for a conversation
//! comment-ranker embed --conversation-id 2demo
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
