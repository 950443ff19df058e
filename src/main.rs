use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cobot_backend::asr::ASRFactory;
use cobot_backend::config::Config;
use cobot_backend::routes;
use cobot_backend::state::AppState;
use cobot_backend::translate::{TranslateFactory, TranslationRequest};
use cobot_backend::tts::{SpeakOptions, SpeechSynthesizer, TTSFactory};

const DEFAULT_LOG_FILTER: &str = "cobot_backend=debug,tower_http=debug";

#[derive(Debug, Parser)]
#[command(name = "cobot-backend", version, about = "Complaint assistant chat backend and speech helpers")]
struct Cli {
    /// Config file (JSON-LD or YAML); defaults to $CONFIG_PATH, conf.jsonld, conf.yaml
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP chat server
    Serve,
    /// Transcribe a WAV, AIFF or FLAC file
    Transcribe { file: PathBuf },
    /// Synthesize speech to an MP3 file and play it
    Speak {
        text: String,
        #[arg(long)]
        lang: Option<String>,
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Skip local playback
        #[arg(long)]
        no_play: bool,
    },
    /// Translate text into another language
    Translate {
        text: String,
        #[arg(long)]
        to: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, loaded_path) = Config::discover(cli.config.as_deref())?;
    init_tracing(&config);

    match loaded_path {
        Some(path) => info!("Loaded configuration from: {}", path),
        None => info!("No configuration file found, using built-in defaults"),
    }

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Transcribe { file } => {
            let transcriber = ASRFactory::create_transcriber(&config.speech_config)?;
            let text = transcriber.transcribe(&file).await?;
            println!("{}", text);
            Ok(())
        }
        Command::Speak { text, lang, output, no_play } => {
            let speech = &config.speech_config;
            let mut synthesizer = SpeechSynthesizer::new(TTSFactory::create_tts(speech)?);
            if !no_play {
                synthesizer = synthesizer.with_player(TTSFactory::create_player(speech));
            }
            let options = SpeakOptions {
                language: lang.unwrap_or_else(|| speech.default_language.clone()),
                filename: output.unwrap_or_else(|| PathBuf::from(&speech.output_file)),
            };
            let path = synthesizer.speak(&text, &options).await?;
            println!("{}", path.display());
            Ok(())
        }
        Command::Translate { text, to } => {
            let translate = &config.translate_config;
            let translator = TranslateFactory::create_translator(translate)?;
            let request = TranslationRequest::new(text).to(to.unwrap_or_else(|| translate.default_target.clone()));
            let result = translator.translate_text(&request).await?;
            println!("{}", result.text);
            Ok(())
        }
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives = config.system_config.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER);
        EnvFilter::new(directives)
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn serve(config: Config) -> Result<()> {
    let host = config.system_config.host.clone();
    let port = config.system_config.port;

    let app_state = AppState::new(&config)?;
    let app = routes::create_app(app_state);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!("Starting server on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
