//! CSS Grid presets.

use crate::models::Preset;

pub(super) const PRESETS: &[Preset] = &[
    Preset {
        name: "Grid Gallery",
        description: "A responsive image gallery using CSS Grid.",
        markup: r#"<div class="grid-gallery">
  <div class="gallery-item">1</div>
  <div class="gallery-item">2</div>
  <div class="gallery-item">3</div>
  <div class="gallery-item">4</div>
  <div class="gallery-item">5</div>
  <div class="gallery-item">6</div>
</div>"#,
        stylesheet: r#".grid-gallery {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
  gap: 1rem;
  padding: 1rem;
  background-color: var(--background-color);
}

.gallery-item {
  background-color: var(--secondary-background);
  padding: 1rem;
  text-align: center;
  border-radius: 4px;
}"#,
    },
    Preset {
        name: "Dashboard Layout",
        description: "A complex dashboard layout using CSS Grid.",
        markup: r#"<div class="dashboard-layout">
  <header>Header</header>
  <nav>Navigation</nav>
  <main>Main Content</main>
  <aside>Sidebar</aside>
  <footer>Footer</footer>
</div>"#,
        stylesheet: r#".dashboard-layout {
  display: grid;
  grid-template-areas:
    "header header"
    "nav main"
    "nav sidebar"
    "footer footer";
  grid-template-columns: 150px 1fr;
  grid-template-rows: auto 1fr auto auto;
  min-height: 400px;
}

.dashboard-layout > * {
  padding: 1rem;
}

.dashboard-layout header { grid-area: header; background-color: var(--secondary-background); }
.dashboard-layout nav { grid-area: nav; background-color: var(--card-background); }
.dashboard-layout main { grid-area: main; background-color: var(--background-color); }
.dashboard-layout aside { grid-area: sidebar; background-color: var(--card-background); }
.dashboard-layout footer { grid-area: footer; background-color: var(--secondary-background); }"#,
    },
    Preset {
        name: "Magazine Layout",
        description: "A magazine-style layout using CSS Grid.",
        markup: r#"<div class="magazine-layout">
  <header>Header</header>
  <article>Main Article</article>
  <aside>Sidebar</aside>
  <section class="featured">Featured Content</section>
  <section class="secondary">Secondary Content</section>
  <footer>Footer</footer>
</div>"#,
        stylesheet: r#".magazine-layout {
  display: grid;
  grid-template-areas:
    "header header header"
    "article article sidebar"
    "featured featured sidebar"
    "secondary secondary secondary"
    "footer footer footer";
  grid-template-columns: 1fr 1fr 200px;
  gap: 1rem;
  min-height: 400px;
}

.magazine-layout > * {
  padding: 1rem;
  background-color: var(--secondary-background);
}

.magazine-layout header { grid-area: header; }
.magazine-layout article { grid-area: article; background-color: var(--card-background); }
.magazine-layout aside { grid-area: sidebar; background-color: var(--card-background); }
.magazine-layout .featured { grid-area: featured; }
.magazine-layout .secondary { grid-area: secondary; background-color: var(--background-color); }
.magazine-layout footer { grid-area: footer; }"#,
    },
    Preset {
        name: "Grid Mosaic",
        description: "A mosaic-style layout using CSS Grid.",
        markup: r#"<div class="grid-mosaic">
  <div class="mosaic-item item1">1</div>
  <div class="mosaic-item item2">2</div>
  <div class="mosaic-item item3">3</div>
  <div class="mosaic-item item4">4</div>
  <div class="mosaic-item item5">5</div>
  <div class="mosaic-item item6">6</div>
</div>"#,
        stylesheet: r#".grid-mosaic {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  grid-template-rows: repeat(3, 100px);
  gap: 1rem;
  padding: 1rem;
  background-color: var(--background-color);
}

.mosaic-item {
  background-color: var(--secondary-background);
  display: flex;
  justify-content: center;
  align-items: center;
  font-size: 1.5rem;
}

.item1 { grid-area: 1 / 1 / 3 / 3; }
.item2 { grid-area: 1 / 3 / 2 / 5; }
.item3 { grid-area: 2 / 3 / 4 / 5; }
.item4 { grid-area: 3 / 1 / 4 / 2; }
.item5 { grid-area: 3 / 2 / 4 / 3; }"#,
    },
    Preset {
        name: "Grid Card Layout",
        description: "A responsive card layout using CSS Grid.",
        markup: r#"<div class="grid-card-layout">
  <div class="card">Card 1</div>
  <div class="card">Card 2</div>
  <div class="card">Card 3</div>
  <div class="card">Card 4</div>
  <div class="card">Card 5</div>
  <div class="card">Card 6</div>
</div>"#,
        stylesheet: r#".grid-card-layout {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: 1rem;
  padding: 1rem;
  background-color: var(--background-color);
}

.card {
  background-color: var(--secondary-background);
  padding: 1rem;
  border-radius: 8px;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
  display: flex;
  justify-content: center;
  align-items: center;
  min-height: 150px;
}"#,
    },
    Preset {
        name: "Grid Holy Grail",
        description: "A 'Holy Grail' layout implemented with CSS Grid.",
        markup: r#"<div class="grid-holy-grail">
  <header>Header</header>
  <nav>Navigation</nav>
  <main>Main Content</main>
  <aside>Sidebar</aside>
  <footer>Footer</footer>
</div>"#,
        stylesheet: r#".grid-holy-grail {
  display: grid;
  grid-template-areas:
    "header header header"
    "nav main aside"
    "footer footer footer";
  grid-template-columns: 150px 1fr 150px;
  grid-template-rows: auto 1fr auto;
  min-height: 400px;
  gap: 1rem;
  padding: 1rem;
  background-color: var(--background-color);
}

.grid-holy-grail > * {
  padding: 1rem;
  background-color: var(--secondary-background);
}

.grid-holy-grail header { grid-area: header; }
.grid-holy-grail nav { grid-area: nav; }
.grid-holy-grail main { grid-area: main; }
.grid-holy-grail aside { grid-area: aside; }
.grid-holy-grail footer { grid-area: footer; }"#,
    },
];
