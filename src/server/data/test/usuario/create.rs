use super::*;

/// Tests account creation with the user role.
///
/// Expected: active account with the given username and hash
#[tokio::test]
async fn creates_active_user_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Usuario)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = UsuarioRepository::new(db);

    let usuario = repository
        .create(CreateUsuarioParam {
            username: "maria".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            rol: Rol::User,
        })
        .await?;

    assert_eq!(usuario.username, "maria");
    assert_eq!(usuario.password_hash, "$argon2id$stub");
    assert_eq!(usuario.rol, Rol::User);
    assert!(usuario.activo);

    Ok(())
}

/// Tests the bootstrap path creates an admin account.
///
/// Expected: account with the admin role
#[tokio::test]
async fn creates_admin_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Usuario)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = UsuarioRepository::new(db);

    let usuario = repository
        .create(CreateUsuarioParam {
            username: "ciberzone".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            rol: Rol::Admin,
        })
        .await?;

    assert_eq!(usuario.rol, Rol::Admin);

    Ok(())
}

/// Tests the unique index rejects a duplicate username at the database level.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_username() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Usuario)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = UsuarioRepository::new(db);

    let param = CreateUsuarioParam {
        username: "maria".to_string(),
        password_hash: "hash".to_string(),
        rol: Rol::User,
    };

    repository.create(param.clone()).await.unwrap();
    let result = repository.create(param).await;

    assert!(result.is_err());
}
