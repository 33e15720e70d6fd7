use std::io::{self, BufRead, Write};
use std::time::Duration;

use log::error;

use recipe_scout::render;
use recipe_scout::{
    ApiClient, AppConfig, AppError, AppState, FileStore, Recipe, RecipeService, ScaleDirection,
    SearchModel,
};

const HELP: &str = "Commands:
  search <query>   search recipes
  page <n>         show another page of results
  open <id>        open a recipe
  inc / dec        adjust servings
  shop             add the open recipe's ingredients to the shopping list
  unshop <id>      remove a shopping list item
  list             show the shopping list
  like             like or unlike the open recipe
  likes            show liked recipes
  quit             exit";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    env_logger::init();

    let config = AppConfig::load()?;
    let api = ApiClient::new(
        config.api_base_url.as_str(),
        Some(Duration::from_secs(config.timeout)),
    )?;
    let storage = FileStore::new(&config.storage_dir);

    let mut state = AppState::new();
    state.restore_likes(&storage);
    if !state.likes.is_empty() {
        println!("{}", render::likes_list(state.likes.entries()));
    }
    println!("recipe-scout — type 'help' for commands");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut parts = line.trim().splitn(2, ' ');
        let command = parts.next().unwrap_or("");
        let argument = parts.next().unwrap_or("").trim();

        match command {
            "" => {}
            "help" => println!("{HELP}"),
            "search" => search(&mut state, &api, &config, argument).await,
            "page" => show_page(&state, argument),
            "open" => open(&mut state, &api, argument).await,
            "inc" => rescale(&mut state, ScaleDirection::Increase),
            "dec" => rescale(&mut state, ScaleDirection::Decrease),
            "shop" => {
                if state.add_recipe_to_list() {
                    println!("{}", render::shopping_list(state.list.items()));
                } else {
                    println!("Open a recipe first.");
                }
            }
            "unshop" => match argument.parse::<u64>() {
                Ok(id) => {
                    state.list.delete(id);
                    println!("{}", render::shopping_list(state.list.items()));
                }
                Err(_) => println!("Usage: unshop <id>"),
            },
            "list" => println!("{}", render::shopping_list(state.list.items())),
            "like" => match state.toggle_like(&storage) {
                Some(true) => println!("Liked ({} total).", state.likes.len()),
                Some(false) => println!("Unliked ({} total).", state.likes.len()),
                None => println!("Open a recipe first."),
            },
            "likes" => println!("{}", render::likes_list(state.likes.entries())),
            "quit" | "exit" => break,
            _ => println!("Unknown command, try 'help'."),
        }
    }

    Ok(())
}

async fn search(state: &mut AppState, api: &ApiClient, config: &AppConfig, query: &str) {
    if query.is_empty() {
        println!("Usage: search <query>");
        return;
    }

    match api.search(query).await {
        Ok(results) => {
            // A slower, older search resolving after this one would
            // overwrite it; requests are not cancelled on overlap.
            state.search = Some(SearchModel::with_per_page(
                query,
                results,
                config.results_per_page,
            ));
            show_page(state, "1");
        }
        Err(err) => {
            error!("search failed: {err}");
            println!("Something went wrong with the search.");
        }
    }
}

fn show_page(state: &AppState, argument: &str) {
    let Some(search) = state.search.as_ref() else {
        println!("Search for something first.");
        return;
    };
    let page = argument.parse::<usize>().unwrap_or(1);
    let (items, pagination) = search.page(page);
    println!("{}", render::results_page(items, &pagination));
}

async fn open(state: &mut AppState, api: &ApiClient, id: &str) {
    if id.is_empty() {
        println!("Usage: open <id>");
        return;
    }

    match api.fetch_by_id(id).await {
        Ok(payload) => {
            let recipe = Recipe::from_payload(id, payload);
            let liked = state.likes.is_liked(id);
            println!("{}", render::recipe_view(&recipe, liked));
            state.recipe = Some(recipe);
        }
        Err(err) => {
            error!("fetch failed: {err}");
            println!("Error processing recipe.");
        }
    }
}

fn rescale(state: &mut AppState, direction: ScaleDirection) {
    let Some(recipe) = state.recipe.as_mut() else {
        println!("Open a recipe first.");
        return;
    };
    if direction == ScaleDirection::Decrease && recipe.servings <= 1 {
        println!("Already at one serving.");
        return;
    }
    recipe.rescale(direction);
    let liked = state.likes.is_liked(&recipe.id);
    println!("{}", render::recipe_view(recipe, liked));
}
