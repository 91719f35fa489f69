use super::*;

fn param() -> CreatePedidoParam {
    CreatePedidoParam {
        nombre: "Maria".to_string(),
        telefono: "5555-1234".to_string(),
        servicio: "Impresion".to_string(),
        detalles: "10 copias a color".to_string(),
        fecha_pref: Some("2025-09-01".to_string()),
        origen: "Web".to_string(),
        archivos_json: None,
        usuario_id: None,
    }
}

/// Tests an anonymous order is created in the pending state.
///
/// Expected: estado Pendiente, no owner
#[tokio::test]
async fn creates_pending_anonymous_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pedido_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pedido = PedidoRepository::new(db).create(param()).await?;

    assert_eq!(pedido.nombre, "Maria");
    assert_eq!(pedido.estado, EstadoPedido::Pendiente);
    assert!(pedido.usuario_id.is_none());
    assert!(pedido.archivos_json.is_none());

    Ok(())
}

/// Tests an authenticated submission records its owner.
///
/// Expected: usuario_id set
#[tokio::test]
async fn records_owner_when_given() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pedido_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = UsuarioFactory::new(db).build().await?;

    let pedido = PedidoRepository::new(db)
        .create(CreatePedidoParam {
            usuario_id: Some(owner.id),
            archivos_json: Some(r#"[{"name":"logo.png"}]"#.to_string()),
            ..param()
        })
        .await?;

    assert_eq!(pedido.usuario_id, Some(owner.id));
    assert_eq!(
        pedido.archivos_json.as_deref(),
        Some(r#"[{"name":"logo.png"}]"#)
    );

    Ok(())
}
