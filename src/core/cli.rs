//! Parody Finder module for handling command-line arguments

pub mod handle_cli {
    //! Handlers for command-line argument parsing

    use std::io::Write;

    use anyhow::Context;

    use super::cli_data::*;
    use crate::core::api::parody_lookup::{MovieResult, ParodyLookup};
    use crate::core::search::{self, RenderedMovie};
    use crate::core::settings_config::Settings;

    /// Handles all the logic for the command line arguments
    pub async fn handle_cli(
        command: Command,
        settings: &Settings,
        lookup: &ParodyLookup,
    ) -> anyhow::Result<()> {
        match command {
            Command::Search { title } => {
                let title = title.join(" ");
                let movie = search::search_once(lookup, &title).await?;

                let mut stdout = std::io::stdout().lock();
                write_movie(
                    &mut stdout,
                    &movie,
                    &settings.lookup.placeholder_poster_url,
                )
                .context("failed to print the movie")?;
                Ok(())
            }
            Command::ConfigPath => {
                println!("{}", Settings::settings_file_path().display());
                Ok(())
            }
        }
    }

    fn write_movie(
        writer: &mut impl Write,
        movie: &MovieResult,
        placeholder_poster_url: &str,
    ) -> std::io::Result<()> {
        let movie = RenderedMovie::new(movie, placeholder_poster_url);

        writeln!(writer, "Title:  {}", movie.title)?;
        writeln!(writer, "Year:   {}", movie.year)?;
        writeln!(writer, "Genres: {}", movie.genre)?;
        writeln!(writer, "Poster: {}", movie.poster_url)?;
        writeln!(writer)?;
        writeln!(writer, "{}", movie.parody)
    }

}

pub mod cli_data {
    //! Data structures for command-line argument parsing

    use clap::{Parser, Subcommand};
    use std::path;

    #[derive(Parser)]
    #[command(author, version, about)]
    pub struct Cli {
        /// Address of the movie lookup service, overrides the settings file
        #[arg(long)]
        pub endpoint: Option<String>,

        /// Directory holding the settings file
        #[arg(long)]
        pub config_dir: Option<path::PathBuf>,

        #[clap(subcommand)]
        pub command: Option<Command>,
    }

    #[derive(Subcommand)]
    pub enum Command {
        /// Look up a movie and print its parody without opening the window
        Search {
            /// Title of the movie
            #[arg(required = true)]
            title: Vec<String>,
        },

        /// Print the location of the settings file
        ConfigPath,
    }

}
