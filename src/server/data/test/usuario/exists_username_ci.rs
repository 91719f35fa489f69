use super::*;

/// Tests a differently cased duplicate is detected.
///
/// Expected: true for "mARIA" when "Maria" exists
#[tokio::test]
async fn detects_differently_cased_duplicate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Usuario)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UsuarioFactory::new(db).username("Maria").build().await?;

    let repository = UsuarioRepository::new(db);

    assert!(repository.exists_username_ci("mARIA").await?);
    assert!(repository.exists_username_ci("maria").await?);

    Ok(())
}

/// Tests an unknown username reports no duplicate.
///
/// Expected: false
#[tokio::test]
async fn returns_false_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Usuario)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UsuarioFactory::new(db).username("maria").build().await?;

    let repository = UsuarioRepository::new(db);

    assert!(!repository.exists_username_ci("pedro").await?);

    Ok(())
}
