use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use property_search::config::Config;
use property_search::favorites::{FavoritesStore, FileStore};
use property_search::maps::GoogleMapsProvider;
use property_search::routes::Route;
use property_search::search::SearchForm;
use property_search::views::{
    listing, DetailState, DetailTab, DetailView, ListingCard, MapState, PropertyDetails,
    SearchPage, ViewLifetime, NO_RESULTS_MESSAGE, NO_SAVED_MESSAGE,
};
use property_search::Catalog;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "property-search")]
#[command(version, long_about = None)]
#[command(about = "Search property listings and keep a list of favorites")]
struct Cli {
    /// Catalog JSON file (defaults to PROPERTY_CATALOG, then the bundled listings)
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Directory holding saved favorites (defaults to PROPERTY_STORE_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    store_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog; every filter is optional
    Search(SearchArgs),

    /// Show one property's details page
    Show {
        #[arg(value_name = "ID")]
        id: String,

        /// Tab to display
        #[arg(long, value_enum, default_value_t = TabArg::Description)]
        tab: TabArg,
    },

    /// List saved properties
    Saved,

    /// Add a property to favorites
    Save {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Remove a property from favorites
    Unsave {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Remove every saved property
    ClearSaved,

    /// Open a page by path: /, /property/<id> or /saved
    Open {
        #[arg(value_name = "PATH")]
        path: String,
    },
}

/// Search form fields, taken verbatim; unusable values are ignored
#[derive(Args)]
struct SearchArgs {
    /// Property type, e.g. House or Flat ("any" for all)
    #[arg(long = "type", value_name = "TYPE")]
    property_type: Option<String>,

    #[arg(long)]
    min_price: Option<String>,

    #[arg(long)]
    max_price: Option<String>,

    #[arg(long)]
    min_bedrooms: Option<String>,

    #[arg(long)]
    max_bedrooms: Option<String>,

    /// Postcode or any part of the location
    #[arg(long)]
    postcode: Option<String>,

    /// Only listings added on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    added_after: Option<String>,
}

impl From<SearchArgs> for SearchForm {
    fn from(args: SearchArgs) -> Self {
        SearchForm {
            property_type: args.property_type,
            min_price: args.min_price,
            max_price: args.max_price,
            min_bedrooms: args.min_bedrooms,
            max_bedrooms: args.max_bedrooms,
            postcode: args.postcode,
            date_after: args.added_after,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum TabArg {
    Description,
    FloorPlan,
    Map,
}

impl From<TabArg> for DetailTab {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::Description => DetailTab::Description,
            TabArg::FloorPlan => DetailTab::FloorPlan,
            TabArg::Map => DetailTab::Map,
        }
    }
}

type Favorites = FavoritesStore<FileStore>;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }
    if let Some(dir) = cli.store_dir {
        config.store_dir = dir;
    }
    debug!("Using {:?}", config);

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::bundled().context("Bundled catalog is invalid")?,
    };
    let mut favorites = FavoritesStore::load(FileStore::new(&config.store_dir));

    match cli.command {
        Commands::Search(args) => search(&catalog, &favorites, &args.into()),
        Commands::Show { id, tab } => show(&catalog, &favorites, &config, &id, tab.into()).await,
        Commands::Saved => {
            saved(&favorites);
            Ok(())
        }
        Commands::Save { id } => save(&catalog, &mut favorites, &id),
        Commands::Unsave { id } => {
            if favorites.remove(&id)? {
                println!("Removed {} from favorites", id);
            } else {
                println!("{} was not saved", id);
            }
            Ok(())
        }
        Commands::ClearSaved => {
            favorites.clear()?;
            println!("Cleared all saved properties");
            Ok(())
        }
        Commands::Open { path } => match Route::parse(&path)? {
            Route::Search => search(&catalog, &favorites, &SearchForm::default()),
            Route::Details(id) => {
                show(&catalog, &favorites, &config, &id, DetailTab::Description).await
            }
            Route::Saved => {
                saved(&favorites);
                Ok(())
            }
        },
    }
}

fn search(catalog: &Catalog, favorites: &Favorites, form: &SearchForm) -> Result<()> {
    let mut page = SearchPage::new(catalog);
    page.submit(form);

    let cards = page.cards();
    if cards.is_empty() {
        println!("{}", NO_RESULTS_MESSAGE);
    }
    print_cards(&cards);

    println!("Favorites: {} saved", favorites.len());
    Ok(())
}

fn saved(favorites: &Favorites) {
    if favorites.is_empty() {
        println!("{}", NO_SAVED_MESSAGE);
        return;
    }
    print_cards(&listing::cards(favorites.items()));
}

fn save(catalog: &Catalog, favorites: &mut Favorites, id: &str) -> Result<()> {
    let Some(property) = catalog.find(id) else {
        println!("Property not found");
        return Ok(());
    };

    if favorites.add(property.clone())? {
        println!("Saved {}", id);
    } else {
        println!("{} is already saved", id);
    }
    Ok(())
}

async fn show(
    catalog: &Catalog,
    favorites: &Favorites,
    config: &Config,
    id: &str,
    tab: DetailTab,
) -> Result<()> {
    let mut details = match DetailView::resolve(catalog, id) {
        DetailState::Found(details) => details,
        DetailState::NotFound { .. } => {
            println!("Property not found");
            return Ok(());
        }
    };
    details.select_tab(tab.index())?;

    let property = details.property();
    println!("{}", property.title());
    println!("{}", property.display_price());
    println!("{}", property.location);
    println!("[{}]", details.favorite_label(favorites));
    println!("Gallery: {} images", details.gallery().len());
    for image in details.gallery() {
        println!("   {}", image.original);
    }
    println!();

    let labels: Vec<&str> = DetailTab::ALL.iter().map(|t| t.label()).collect();
    println!("Tabs: {} (showing {})", labels.join(" | "), tab.label());
    match details.active_tab() {
        DetailTab::Description => {
            println!("{}", property.description);
            for (label, value) in details.facts() {
                println!("   {}: {}", label, value);
            }
        }
        DetailTab::FloorPlan => println!("Floor plan: {}", details.floor_plan()),
        DetailTab::Map => print_map(&mut details, config).await?,
    }
    Ok(())
}

async fn print_map(details: &mut PropertyDetails<'_>, config: &Config) -> Result<()> {
    let Some(api_key) = &config.maps_api_key else {
        println!("Map unavailable: set MAPS_API_KEY to enable the map tab");
        return Ok(());
    };

    let provider = GoogleMapsProvider::new(api_key.clone(), config.maps_timeout)?;
    info!("Loading map for {}", details.property().location);

    let lifetime = ViewLifetime::new();
    match details.map_mut().load(&provider, lifetime.token()).await {
        MapState::Ready { marker, .. } => {
            println!(
                "Map: marker \"{}\" at {:.5}, {:.5}",
                marker.title, marker.position.lat, marker.position.lng
            );
            println!("Embed: {}", provider.embed_url(&marker.title)?);
        }
        MapState::Failed(e) => println!("Map error: {}", e),
        MapState::Cancelled | MapState::Loading => println!("Map not loaded"),
    }
    Ok(())
}

fn print_cards(cards: &[ListingCard]) {
    for (i, card) in cards.iter().enumerate() {
        println!("{}. {} ({})", i + 1, card.title, card.price);
        println!("   {}", card.location);
        println!("   ID: {}", card.id);
        println!("   Details: {}", card.details_path);
        println!();
    }
}
