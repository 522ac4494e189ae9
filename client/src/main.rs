// In src/main.rs

use anyhow::Result;
use blog_client::blog_client::{HttpBlogClient, DEFAULT_SERVER};
use blog_client::client_api::{BlogApi, ClientError};
use blog_client::command::{Command, HELP};
use blog_server_node::model::Blog;
use clap::{App, Arg};
use tokio::io::{self, AsyncBufReadExt, BufReader};

fn print_blog(blog: &Blog) {
    println!("{}  {}  ({})", blog.id, blog.title, blog.content);
}

/// Runs one command against the server. Returns `false` once the user quits.
async fn run_command(client: &dyn BlogApi, command: Command) -> Result<bool, ClientError> {
    match command {
        Command::Create(count) => {
            let blogs = client.create(count).await?;
            println!("Created {} blogs", blogs.len());
            blogs.iter().for_each(print_blog);
        }
        Command::List => {
            let blogs = client.list().await?;
            if blogs.is_empty() {
                println!("No blogs");
            }
            blogs.iter().for_each(print_blog);
        }
        Command::Get(id) => print_blog(&client.get(&id).await?),
        Command::Update { id, title, content } => {
            print_blog(&client.update(&id, &title, &content).await?)
        }
        Command::Delete(id) => {
            client.delete(&id).await?;
            println!("Deleted {}", id);
        }
        Command::Stats => println!("{} blogs", client.count().await?),
        Command::Help => println!("{}", HELP),
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let matches = App::new("Blog Client")
        .version("1.0")
        .about("Talks to a blog server")
        .arg(
            Arg::new("server")
                .short('s')
                .long("server")
                .takes_value(true)
                .help("Server base url"),
        )
        .get_matches();

    let server = matches.value_of("server").unwrap_or(DEFAULT_SERVER);
    let client = HttpBlogClient::new(server)?;

    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    println!("Blog Client ({})", client.base());
    println!("Type 'help' for a list of commands");

    while reader.read_line(&mut line).await? > 0 {
        if !line.trim().is_empty() {
            match line.parse::<Command>() {
                Ok(command) => match run_command(&client, command).await {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(e) => eprintln!("Error: {}", e),
                },
                Err(e) => eprintln!("{}", e),
            }
        }
        line.clear();
    }

    Ok(())
}
