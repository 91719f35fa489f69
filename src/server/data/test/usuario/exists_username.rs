use super::*;

/// Tests an exact username match is detected.
///
/// Expected: true only for the exact spelling
#[tokio::test]
async fn matches_exact_spelling_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Usuario)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UsuarioFactory::new(db).username("ciberzone").build().await?;

    let repository = UsuarioRepository::new(db);

    assert!(repository.exists_username("ciberzone").await?);
    assert!(!repository.exists_username("Ciberzone").await?);
    assert!(!repository.exists_username("otro").await?);

    Ok(())
}
