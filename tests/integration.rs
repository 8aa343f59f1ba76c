// SPDX-License-Identifier: MPL-2.0
use pawfeed::app::{App, Flags, Message};
use pawfeed::config::{self, Config, FeedVideoConfig};
use pawfeed::domain::filter::{FilterSelection, Region, Species};
use pawfeed::domain::route::{ListingQuery, Route};
use pawfeed::i18n::fluent::I18n;
use pawfeed::ui::category_modal::{self, CategoryTab};
use pawfeed::ui::feed::{self, tile};
use pawfeed::ui::navbar;
use pawfeed::video_player::{
    DecoderCommand, DecoderCommandSender, ElementState, PlaybackEvent, PlaybackMessage,
};
use tempfile::{tempdir, TempDir};
use tokio::sync::mpsc::UnboundedReceiver;

fn video(url: &str, species: &str, region: &str) -> FeedVideoConfig {
    FeedVideoConfig {
        url: url.to_string(),
        title: Some(format!("{species} in {region}")),
        species: Some(species.to_string()),
        region: Some(region.to_string()),
    }
}

fn app_with(config: Config) -> (App, TempDir) {
    let dir = tempdir().expect("Failed to create temporary directory");
    let flags = Flags {
        lang: Some("ko".to_string()),
        ..Flags::default()
    };
    let app = App::with_config(config, &flags, Some(dir.path().to_path_buf()));
    (app, dir)
}

fn open_modal(app: &mut App) {
    let _ = app.update(Message::Navbar(navbar::Message::CategoryPressed));
}

fn modal(app: &mut App, message: category_modal::Message) {
    let _ = app.update(Message::Navbar(navbar::Message::Modal(message)));
}

fn attach_decoder(app: &mut App, tile: u64) -> UnboundedReceiver<DecoderCommand> {
    let (sender, receiver) = DecoderCommandSender::channel();
    let _ = app.update(Message::Feed(feed::Message::Playback(PlaybackEvent {
        tile,
        message: PlaybackMessage::Started(sender),
    })));
    receiver
}

#[test]
fn test_dog_then_seoul_navigates_once() {
    let (mut app, _dir) = app_with(Config::default());

    open_modal(&mut app);
    modal(&mut app, category_modal::Message::SpeciesPicked(Species::Dog));
    assert_eq!(app.filter().species, Species::Dog);
    assert_eq!(app.navbar().tab(), CategoryTab::Region);
    assert!(app.navbar().is_modal_open());
    assert!(app.router().history().is_empty());

    modal(&mut app, category_modal::Message::RegionPicked(Region::Seoul));
    assert_eq!(app.filter().region, Region::Seoul);
    assert!(!app.navbar().is_modal_open());
    assert_eq!(app.navbar().tab(), CategoryTab::Species);

    let paths: Vec<String> = app.router().history().iter().map(Route::to_path).collect();
    assert_eq!(paths, vec!["/?type=강아지&area=서울&page=1".to_string()]);
}

#[test]
fn test_every_species_is_written_exactly() {
    for species in Species::ALL {
        let (mut app, _dir) = app_with(Config::default());
        open_modal(&mut app);
        modal(&mut app, category_modal::Message::SpeciesPicked(species));
        assert_eq!(app.filter().species, species);
        assert_eq!(app.filter().region, Region::Nationwide);
        assert_eq!(app.navbar().tab(), CategoryTab::Region);
    }
}

#[test]
fn test_every_region_commits_and_navigates_once() {
    for region in Region::ALL {
        let (mut app, _dir) = app_with(Config::default());
        open_modal(&mut app);
        modal(&mut app, category_modal::Message::RegionPicked(region));

        assert_eq!(app.filter().region, region);
        assert!(!app.navbar().is_modal_open());
        let expected = Route::Home(Some(ListingQuery::first_page(FilterSelection::new(
            Species::All,
            region,
        ))));
        assert_eq!(app.router().history(), &[expected]);
    }
}

#[test]
fn test_backdrop_closes_but_tab_switch_does_not() {
    let (mut app, _dir) = app_with(Config::default());
    open_modal(&mut app);
    modal(
        &mut app,
        category_modal::Message::TabSelected(CategoryTab::Region),
    );
    assert!(app.navbar().is_modal_open());

    modal(&mut app, category_modal::Message::BackdropPressed);
    assert!(!app.navbar().is_modal_open());
    assert_eq!(app.navbar().tab(), CategoryTab::Species);
    assert_eq!(*app.filter(), FilterSelection::default());
    assert!(app.router().history().is_empty());
}

#[test]
fn test_listing_filters_feed_tiles() {
    let mut config = Config::default();
    config.feed.videos = vec![
        video("a.mp4", "강아지", "서울"),
        video("b.mp4", "고양이", "서울"),
        video("c.mp4", "강아지", "부산"),
        video("d.mp4", "기타", "서울"),
    ];
    let (mut app, _dir) = app_with(config);
    assert_eq!(app.feed().tiles().len(), 4);

    open_modal(&mut app);
    modal(&mut app, category_modal::Message::RegionPicked(Region::Seoul));
    let urls: Vec<&str> = app.feed().tiles().iter().map(tile::State::url).collect();
    assert_eq!(urls, vec!["a.mp4", "b.mp4", "d.mp4"]);

    let _ = app.update(Message::Navbar(navbar::Message::HomePressed));
    assert_eq!(app.feed().tiles().len(), 4);
}

#[test]
fn test_autoplay_rejection_then_click_starts_playback() {
    let mut config = Config::default();
    config.feed.muted = Some(false);
    config.feed.videos = vec![video("a.mp4", "강아지", "서울")];
    let (mut app, _dir) = app_with(config);
    let mut commands = attach_decoder(&mut app, 0);

    // Audible autoplay is refused without a user gesture
    let first = &app.feed().tiles()[0];
    assert!(first.is_active());
    assert_eq!(first.element().state(), ElementState::Paused);
    assert!(first.is_loading());
    assert_eq!(first.overlay(), tile::Overlay::Instruction);
    assert!(commands.try_recv().is_err());

    let _ = app.update(Message::Feed(feed::Message::Tile(0, tile::Message::Pressed)));
    assert_eq!(commands.try_recv(), Ok(DecoderCommand::Play));
    assert_eq!(
        app.feed().tiles()[0].element().state(),
        ElementState::PlayPending
    );

    let _ = app.update(Message::Feed(feed::Message::Playback(PlaybackEvent {
        tile: 0,
        message: PlaybackMessage::Playing,
    })));
    let first = &app.feed().tiles()[0];
    assert!(!first.is_loading());
    assert_eq!(first.overlay(), tile::Overlay::None);
}

#[test]
fn test_overlay_rules() {
    use tile::{overlay, Overlay};

    for playing in [false, true] {
        assert_eq!(overlay(true, true, playing), Overlay::Instruction);
        assert_eq!(overlay(false, true, playing), Overlay::None);
        assert_eq!(overlay(false, false, playing), Overlay::None);
    }
    assert_eq!(overlay(true, false, false), Overlay::Instruction);
    assert_eq!(overlay(true, false, true), Overlay::Spinner);
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join(config::CONFIG_FILE);

    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    config::save_to_path(&initial, &path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("category-tab-species"), "Species");

    let mut korean = loaded.clone();
    korean.general.language = Some("ko".to_string());
    config::save_to_path(&korean, &path).expect("Failed to write updated config file");

    let reloaded = config::load_from_path(&path).expect("Failed to reload config");
    let i18n = I18n::new(None, &reloaded);
    assert_eq!(i18n.current_locale().to_string(), "ko");
    assert_eq!(i18n.tr("category-tab-species"), "종류");
}

#[test]
fn test_config_round_trip_keeps_feed_and_filter() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join(config::CONFIG_FILE);

    let mut original = Config::default();
    original.feed.autoplay = Some(false);
    original.feed.videos = vec![video("https://example.com/dog.mp4", "강아지", "제주특별자치도")];
    original.filter.species = Some("고양이".to_string());

    config::save_to_path(&original, &path).expect("Failed to save config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, original);
    assert_eq!(
        loaded.filter.selection(),
        FilterSelection::new(Species::Cat, Region::Nationwide)
    );
}

#[test]
fn test_route_paths_round_trip() {
    let path = "/?type=강아지&area=서울&page=1";
    let route = Route::parse(path).expect("home path should parse");
    assert_eq!(route.to_path(), path);

    for route in [Route::FindShelter, Route::Register, Route::Profile] {
        assert_eq!(Route::parse(&route.to_path()), Some(route));
    }
}
