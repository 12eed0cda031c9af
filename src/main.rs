use std::io::{self, Write};

use log::{debug, info};

mod catalog;
mod config;
mod mpd;
mod rating;
mod report;

use config::Settings;
use mpd::MpdClient;
use rating::SidecarResolver;
use report::{AlbumRow, ArtistGroup};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut clog = colog::default_builder();
    clog.filter(None, log::LevelFilter::Info);
    clog.init();

    let settings = Settings::load()?;
    settings.validate()?;

    let addr = settings.connection.server_addr()?;
    info!("connecting to {}:{}", addr.host, addr.port);
    let mut client = MpdClient::connect(&addr)?;

    let resolver = SidecarResolver::new(&settings.library);

    let mut artists = catalog::artists(&mut client)?;
    artists.sort_by_key(|name| catalog::artist_sort_key(name));
    info!("{} album artists in the catalog", artists.len());

    let mut groups: Vec<ArtistGroup> = Vec::with_capacity(artists.len());
    for artist in artists {
        let albums = catalog::albums(&mut client, &artist)?;
        if albums.is_empty() {
            debug!("no dated albums for {artist:?}, skipping");
            continue;
        }
        let mut rows = Vec::with_capacity(albums.len());
        for album in albums {
            let rating =
                rating::rating_for_album(&mut client, &resolver, &artist, &album.date, &album.title)?;
            rows.push(AlbumRow {
                date: album.date,
                album: album.title,
                rating,
            });
        }
        groups.push(ArtistGroup {
            artist,
            albums: rows,
        });
    }
    info!(
        "{} albums listed",
        groups.iter().map(|g| g.albums.len()).sum::<usize>()
    );

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    report::write_report(&mut out, &settings.report.title, &groups)?;
    out.flush()?;
    Ok(())
}
