use super::*;

/// Tests an active account is found by exact username.
///
/// Expected: Some(Usuario)
#[tokio::test]
async fn finds_active_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Usuario)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UsuarioFactory::new(db).username("maria").build().await?;

    let repository = UsuarioRepository::new(db);
    let found = repository.find_active_by_username("maria").await?;

    assert_eq!(found.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests an inactive account is invisible to login lookups.
///
/// Expected: None
#[tokio::test]
async fn ignores_inactive_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Usuario)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UsuarioFactory::new(db)
        .username("maria")
        .activo(false)
        .build()
        .await?;

    let repository = UsuarioRepository::new(db);
    let found = repository.find_active_by_username("maria").await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests the login lookup is an exact match, not case-insensitive.
///
/// Expected: None for a differently cased username
#[tokio::test]
async fn matches_username_exactly() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Usuario)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UsuarioFactory::new(db).username("Maria").build().await?;

    let repository = UsuarioRepository::new(db);
    let found = repository.find_active_by_username("maria").await?;

    assert!(found.is_none());

    Ok(())
}
