//! Built-in product table.

/// Default products as (name, [(variant key in g/ml, price in major units)]).
pub const DEFAULT_PRODUCTS: &[(&str, &[(u32, i64)])] = &[
    ("Coconut Oil", &[(1000, 809), (500, 438), (200, 195)]),
    ("Safflower Oil", &[(1000, 532), (500, 299)]),
    ("Sunflower Oil", &[(1000, 410), (500, 238)]),
    ("Groundnut Oil", &[(1000, 483), (500, 288)]),
    ("Mustard Oil", &[(1000, 510), (500, 266), (200, 135)]),
    ("A2 Cow Ghee", &[(1000, 2162), (500, 1129), (200, 594)]),
    ("Flaxseed Oil", &[(500, 355), (200, 162)]),
    ("Almond Oil", &[(500, 1186), (200, 495), (100, 264)]),
    ("Castor Oil", &[(500, 261), (200, 124), (100, 79)]),
    ("Kalonji Oil", &[(500, 1087), (200, 455), (100, 244)]),
    ("Virgin Coconut Oil", &[(1000, 809), (500, 438), (200, 195)]),
    ("Turmeric", &[(1000, 512), (500, 268), (250, 142)]),
    ("Honey", &[(1000, 736), (500, 428), (250, 295)]),
    ("Jaggery cubes", &[(1000, 152), (500, 91)]),
    ("Jaggery powder", &[(1000, 194), (500, 104)]),
    ("Brown Sugar", &[(1000, 225)]),
];
