use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pairs_engine::{Deck, GameRng, GameSession, FACE_COUNT};

fn bench_deck_generation(c: &mut Criterion) {
    let mut rng = GameRng::new(12345);

    c.bench_function("generate_32_pair_deck", |b| {
        b.iter(|| Deck::generate(black_box(FACE_COUNT), &mut rng))
    });
}

fn bench_reveal(c: &mut Criterion) {
    c.bench_function("reveal_resolve_turn", |b| {
        let mut session = GameSession::with_seed(FACE_COUNT, 12345).unwrap();
        b.iter(|| {
            // Mismatches leave the deck hidden, so the session can absorb
            // an arbitrary number of turns.
            let first = session
                .deck()
                .iter()
                .find(|card| card.is_hidden())
                .map(|card| card.position)
                .unwrap();
            let first_face = session.deck()[first].face;
            let second = session
                .deck()
                .iter()
                .find(|card| card.is_hidden() && card.face != first_face)
                .map(|card| card.position)
                .unwrap();
            session.reveal(black_box(first)).unwrap();
            session.reveal(black_box(second)).unwrap();
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("play_full_8_pair_game", |b| {
        b.iter(|| {
            let mut session = GameSession::with_seed(8, black_box(12345)).unwrap();
            while !session.is_complete() {
                let first = session
                    .deck()
                    .iter()
                    .find(|card| card.is_hidden())
                    .unwrap();
                let partner = session
                    .deck()
                    .iter()
                    .find(|card| card.position != first.position && card.face == first.face)
                    .unwrap();
                let (first, partner) = (first.position, partner.position);
                session.reveal(first).unwrap();
                session.reveal(partner).unwrap();
            }
            session
        })
    });
}

criterion_group!(benches, bench_deck_generation, bench_reveal, bench_full_game);
criterion_main!(benches);
