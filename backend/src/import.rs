//! The match-result ingestion pipeline.
//!
//! An uploaded result sheet is parsed completely up front (see the
//! `importer` crate), then every game of the sheet is loaded inside a single
//! database transaction. Either the whole sheet is persisted or nothing is.

use diesel_async::AsyncPgConnection;

pub mod loader;
pub mod resolve;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error(transparent)]
    Parse(#[from] importer::ParseError),
    #[error("invalid game mode: {0}")]
    UnknownGameMode(String),
    #[error("invalid map: {0}")]
    UnknownMap(String),
    #[error("invalid hero: {0}")]
    UnknownHero(String),
    #[error("storage error: {0}")]
    Storage(#[from] diesel::result::Error),
}

/// Imports one result sheet into the given tournament.
///
/// Returns the number of games created. On any error the transaction is
/// rolled back and no row created by this call survives; the caller is
/// expected to re-submit a corrected sheet.
#[tracing::instrument(skip(conn, data))]
pub async fn import_results(
    conn: &mut AsyncPgConnection,
    tournament_id: i32,
    data: &[u8],
) -> Result<usize, ImportError> {
    // Classify the whole sheet before touching the database, loading needs
    // no partial-commit visibility.
    let records = importer::parse(data)?;

    tracing::info!("Importing {} games", records.len());

    let count = records.len();
    conn.build_transaction()
        .run::<_, ImportError, _>(|conn| {
            Box::pin(async move {
                for record in records.iter() {
                    loader::load_game(conn, tournament_id, record).await?;
                }

                Ok(())
            })
        })
        .await?;

    Ok(count)
}
