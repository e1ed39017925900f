use chrono::Utc;
use rowbind::{Mapper, Sqlite};
use std::{sync::Arc, thread};
use tests::models::Post;

fn assert_sync_send<T: Send + Sync>() {}

#[test]
fn mapper_is_sync_send() {
    assert_sync_send::<Mapper<Sqlite>>();
    assert_sync_send::<Mapper<Arc<Sqlite>>>();
    assert_sync_send::<rowbind::TableSpec>();
}

#[test]
fn shared_mapper_across_threads() {
    tests::init_tracing();

    let mapper = Arc::new(Mapper::new(Sqlite::in_memory().unwrap()));
    mapper.create_table::<Post>(false).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let mapper = mapper.clone();
            thread::spawn(move || {
                for i in 0..5 {
                    let mut post = Post::new(&format!("post {worker}-{i}"), Utc::now());
                    mapper.insert(&mut post).unwrap();
                    assert!(post.id > 0);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(mapper.select().count::<Post>().unwrap(), 20);
}
