use super::*;

use chrono::{Duration, Utc};

/// Tests unfiltered listing comes back newest first.
///
/// Expected: descending creation order
#[tokio::test]
async fn returns_orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pedido_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let older = PedidoFactory::new(db)
        .creado_en(Utc::now() - Duration::hours(3))
        .build()
        .await?;
    let newer = PedidoFactory::new(db).creado_en(Utc::now()).build().await?;

    let pedidos = PedidoRepository::new(db)
        .get_all(ListPedidosParam::default())
        .await?;

    assert_eq!(pedidos.len(), 2);
    assert_eq!(pedidos[0].id, newer.id);
    assert_eq!(pedidos[1].id, older.id);

    Ok(())
}

/// Tests the status filter is an exact match.
///
/// Expected: only orders in the requested status
#[tokio::test]
async fn filters_by_estado() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pedido_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PedidoFactory::new(db)
        .estado(EstadoPedido::Pendiente)
        .build()
        .await?;
    let completado = PedidoFactory::new(db)
        .estado(EstadoPedido::Completado)
        .build()
        .await?;

    let pedidos = PedidoRepository::new(db)
        .get_all(ListPedidosParam {
            estado: Some(EstadoPedido::Completado),
            search: None,
        })
        .await?;

    assert_eq!(pedidos.len(), 1);
    assert_eq!(pedidos[0].id, completado.id);

    Ok(())
}

/// Tests the search text matches nombre, telefono, and servicio ignoring case.
///
/// Expected: a hit on any of the three columns
#[tokio::test]
async fn searches_across_columns_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pedido_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let by_nombre = PedidoFactory::new(db)
        .nombre("Maria Lopez")
        .telefono("1111-0000")
        .build()
        .await?;
    let by_servicio = PedidoFactory::new(db)
        .nombre("Pedro")
        .telefono("2222-0000")
        .servicio("Impresiones Maria")
        .build()
        .await?;
    PedidoFactory::new(db)
        .nombre("Juan")
        .telefono("3333-0000")
        .servicio("Internet")
        .build()
        .await?;

    let repository = PedidoRepository::new(db);
    let pedidos = repository
        .get_all(ListPedidosParam {
            estado: None,
            search: Some("MARIA".to_string()),
        })
        .await?;

    let ids: Vec<i32> = pedidos.iter().map(|p| p.id).collect();
    assert_eq!(pedidos.len(), 2);
    assert!(ids.contains(&by_nombre.id));
    assert!(ids.contains(&by_servicio.id));

    let by_phone = repository
        .get_all(ListPedidosParam {
            estado: None,
            search: Some("3333".to_string()),
        })
        .await?;
    assert_eq!(by_phone.len(), 1);

    Ok(())
}

/// Tests a blank search string is ignored.
///
/// Expected: every order returned
#[tokio::test]
async fn ignores_blank_search() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pedido_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PedidoFactory::new(db).build().await?;
    PedidoFactory::new(db).build().await?;

    let pedidos = PedidoRepository::new(db)
        .get_all(ListPedidosParam {
            estado: None,
            search: Some("   ".to_string()),
        })
        .await?;

    assert_eq!(pedidos.len(), 2);

    Ok(())
}
