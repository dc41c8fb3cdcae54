//! Global CSS styles for QuestBoard.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* VOID (Backgrounds) */
  --void-black: #0a0a0a;
  --void-lighter: #0e0e12;
  --void-border: #1a1a1a;

  /* GOLD (Titles, Difficulty, Currency) */
  --gold: #d4af37;
  --gold-glow: rgba(212, 175, 55, 0.3);

  /* CYAN (Tabs, Links, Accents) */
  --cyan: #00d4aa;
  --cyan-glow: rgba(0, 212, 170, 0.3);

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* SEMANTIC */
  --danger: #ff3366;
  --warning: #ff9f00;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--void-black);
  color: var(--text-primary);
  font-family: var(--font-mono);
  font-size: 1rem;
  line-height: 1.5;
}

/* === Board Layout === */
.board {
  max-width: 820px;
  margin: 0 auto;
  padding: 2rem 1.5rem 4rem;
}

.board-header h1 {
  font-family: var(--font-serif);
  font-size: 2.5rem;
  color: var(--gold);
  text-shadow: 0 0 20px var(--gold-glow);
}

.board-tagline {
  color: var(--text-muted);
  font-size: 0.875rem;
  margin-bottom: 1.5rem;
}

/* === Category Tabs === */
.category-tabs {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-bottom: 1.5rem;
  border-bottom: 1px solid var(--void-border);
  padding-bottom: 0.75rem;
}

.tab {
  background: transparent;
  border: 1px solid var(--void-border);
  border-radius: 4px;
  color: var(--text-secondary);
  font-family: var(--font-mono);
  font-size: 0.875rem;
  padding: 0.5rem 1rem;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.tab:hover {
  border-color: var(--cyan);
  color: var(--text-primary);
}

.tab.active {
  border-color: var(--cyan);
  color: var(--cyan);
  box-shadow: 0 0 12px var(--cyan-glow);
}

/* === Loading / Message States === */
.board-loading {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  padding: 4rem 0;
  color: var(--text-muted);
}

.loading-spinner {
  width: 32px;
  height: 32px;
  border: 2px solid var(--void-border);
  border-top-color: var(--cyan);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.board-message {
  padding: 4rem 0;
  text-align: center;
  color: var(--text-muted);
}

/* === Quest Cards === */
.quest-list {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.quest-card {
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-radius: 8px;
  overflow: hidden;
  transition: border-color var(--transition-fast);
}

.quest-card:hover {
  border-color: var(--gold);
}

.quest-header {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1rem;
  cursor: pointer;
}

.quest-image {
  width: 72px;
  height: 72px;
  object-fit: cover;
  border-radius: 4px;
  border: 1px solid var(--void-border);
}

.quest-info {
  flex: 1;
  min-width: 0;
}

.quest-id {
  font-size: 0.75rem;
  color: var(--text-muted);
}

.quest-name {
  font-family: var(--font-serif);
  font-size: 1.375rem;
  color: var(--gold);
}

.quest-subtitle {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.quest-difficulty {
  font-size: 0.875rem;
  margin-top: 0.25rem;
}

.expand-icon {
  color: var(--text-muted);
  font-size: 0.75rem;
}

/* === Card Body (collapsed by default) === */
.quest-body {
  display: none;
  border-top: 1px solid var(--void-border);
}

.quest-body.expanded {
  display: block;
}

.quest-body-content {
  padding: 1rem 1.25rem 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.quest-body-content h3 {
  font-size: 1rem;
  color: var(--cyan);
  text-transform: uppercase;
  letter-spacing: 0.05em;
  margin-bottom: 0.5rem;
}

.quest-body-content h4 {
  font-size: 0.875rem;
  color: var(--gold);
  margin-bottom: 0.25rem;
}

.quest-body-content ul {
  list-style: none;
  padding-left: 0.75rem;
}

.quest-body-content li::before {
  content: "- ";
  color: var(--text-muted);
}

.reward-section {
  margin-bottom: 0.5rem;
}

.currency-rewards {
  display: flex;
  gap: 2rem;
}

.currency-section p {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.mode-notes p {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.restriction-list,
.weapon-times {
  margin-top: 0.5rem;
  font-size: 0.875rem;
}

.weapon-time {
  border-left: 2px solid var(--void-border);
  padding-left: 0.75rem;
  margin: 0.5rem 0;
}

.weapon-time .note {
  color: var(--warning);
  font-size: 0.8125rem;
}

.claim-section {
  margin-bottom: 0.5rem;
  font-size: 0.875rem;
}
"#;
