use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use synvis_distill::distill;
use synvis_server::Server;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
enum Options {
    /// Serve the tree over stdio to an editor client.
    Serve,
    /// Parse a file and print its distilled tree as JSON.
    Dump { path: Utf8PathBuf },
}

fn main() -> anyhow::Result<()> {
    match Options::parse() {
        Options::Serve => Server::stdio()?.run(),
        Options::Dump { path } => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read `{path}`"))?;

            let parse = synvis_parse::parse(&text)?;
            for error in &parse.errors {
                eprintln!("{path}: {error}");
            }

            let tree = distill(&parse.root, &text);
            println!("{}", serde_json::to_string_pretty(&tree.to_node(tree.root()))?);
            Ok(())
        }
    }
}
