use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for bookholder
/// CLI application to store and query books in SQLite
#[derive(Parser)]
#[command(
    name = "bookholder",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small book library on SQLite: insert, query, export and generate test data",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and create the books table
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Create the table, insert generated books and show the thick ones
    Demo {
        #[arg(
            long,
            default_value = "1000",
            allow_negative_numbers = true,
            help = "Number of books to generate"
        )]
        count: String,
    },

    /// Insert randomly generated books
    Seed {
        #[arg(
            long,
            default_value = "10",
            allow_negative_numbers = true,
            help = "Number of books to generate"
        )]
        count: String,
    },

    /// Insert a single book
    Add {
        #[arg(long)]
        title: String,

        #[arg(long, help = "Comma separated author names")]
        authors: String,

        #[arg(long)]
        isbn13: String,

        #[arg(long, allow_negative_numbers = true)]
        pages: String,

        #[arg(long, allow_negative_numbers = true)]
        year: String,

        #[arg(long, allow_negative_numbers = true)]
        price: String,

        #[arg(
            long,
            allow_negative_numbers = true,
            help = "Discount percentage (10, 20, ... 90)"
        )]
        discount: Option<String>,
    },

    /// List books matching one filter
    #[command(group(
        ArgGroup::new("filter")
            .required(true)
            .args(["year", "price_less", "pages_greater"])
    ))]
    List {
        #[arg(long, allow_negative_numbers = true, help = "Books published in this year")]
        year: Option<String>,

        #[arg(
            long = "price-less",
            allow_negative_numbers = true,
            help = "Books cheaper than this price"
        )]
        price_less: Option<String>,

        #[arg(
            long = "pages-greater",
            allow_negative_numbers = true,
            help = "Books with more pages than this"
        )]
        pages_greater: Option<String>,

        #[arg(long, help = "Print JSON instead of a table")]
        json: bool,
    },

    /// Count books, optionally for one year
    Count {
        #[arg(long, allow_negative_numbers = true)]
        year: Option<String>,
    },

    /// Export books to CSV
    Export {
        #[arg(
            long,
            allow_negative_numbers = true,
            help = "Maximum number of books to export (negative: all)"
        )]
        limit: String,

        #[arg(long, value_name = "FILE", help = "Output file (default from config)")]
        file: Option<String>,
    },

    /// Delete a book by id
    Del {
        #[arg(long, allow_negative_numbers = true)]
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Delete every book but keep the table
    Clean {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Drop the books table
    Drop {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
