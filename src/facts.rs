use rand::seq::IndexedRandom;

pub const SPACE_FACTS: [&str; 10] = [
    "Did you know? The Sun accounts for about 99.86% of the mass in our solar system.",
    "Did you know? A day on Venus is longer than its year.",
    "Did you know? Neutron stars can spin at a rate of 600 times per second.",
    "Did you know? There are more stars in the universe than grains of sand on Earth.",
    "Did you know? Jupiter has 92 known moons!",
    "Did you know? The footprints on the Moon will remain for millions of years.",
    "Did you know? Saturn's rings are made mostly of ice particles.",
    "Did you know? The largest volcano in the solar system is on Mars.",
    "Did you know? Space is completely silent.",
    "Did you know? The Milky Way galaxy is about 100,000 light-years across.",
];

pub fn random_fact() -> &'static str {
    SPACE_FACTS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(SPACE_FACTS[0])
}
