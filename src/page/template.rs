//! The fixed HTML head and tail wrapped around the edited SVG.
//!
//! The tail carries two slots (`__GUIDE_DATA__`, `__DEFAULT_DATA__`) where
//! the serialized data tables from [`super::guide`] are spliced in. JSON is
//! a valid JavaScript object literal, and object keys are reachable with a
//! numeric index, so the script block consumes the tables directly.

use super::guide;
use crate::error::{Result, TabimapError};

/// Slot in [`PAGE_TAIL_TEMPLATE`] for the prefecture table.
const GUIDE_DATA_SLOT: &str = "__GUIDE_DATA__";

/// Slot in [`PAGE_TAIL_TEMPLATE`] for the fallback record.
const DEFAULT_DATA_SLOT: &str = "__DEFAULT_DATA__";

/// Indentation of the `const` declarations inside the script block.
const SCRIPT_INDENT: usize = 8;

/// Render the page tail with both data tables spliced in.
pub fn render_tail() -> Result<String> {
    let guide_json = to_indented_json(&guide::guide_data())?;
    let default_json = to_indented_json(&guide::default_record())?;

    Ok(PAGE_TAIL_TEMPLATE
        .replacen(GUIDE_DATA_SLOT, &guide_json, 1)
        .replacen(DEFAULT_DATA_SLOT, &default_json, 1))
}

/// Serialize a value to pretty JSON with continuation lines indented to the
/// script block.
fn to_indented_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| TabimapError::Render(e.to_string()))?;

    let pad = " ".repeat(SCRIPT_INDENT);
    Ok(json.replace('\n', &format!("\n{}", pad)))
}

/// Everything before the SVG: doctype, styles, and the opening of the map
/// section.
pub const PAGE_HEAD: &str = r##"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>日本観光ガイド - JAPAN TOUR GUIDE</title>
    <style>
        :root {
            --primary-color: #A6CE39; /* Map Green */
            --hover-color: #C1E16C; /* Light Green */
            --border-color: #FFFFFF;
            --bg-color: #FFFFFF;
            --text-color: #333333;
            --accent-color: #FF6B6B;
        }

        * {
            box-sizing: border-box;
        }

        body {
            margin: 0;
            padding: 0;
            font-family: 'Helvetica Neue', Arial, 'Hiragino Kaku Gothic ProN', 'Hiragino Sans', Meiryo, sans-serif;
            background-color: var(--bg-color);
            color: var(--text-color);
            overflow-x: hidden;
        }

        .app-container {
            display: flex;
            height: 100vh;
            width: 100vw;
            overflow: hidden;
        }

        /* Map Section */
        .map-section {
            flex: 1;
            display: flex;
            justify-content: center;
            align-items: center;
            padding: 20px;
            background-color: #f9f9f9;
            position: relative;
            overflow: auto;
        }

        .geolonia-svg-map {
            width: 100%;
            height: auto;
            max-height: 90vh;
            max-width: 900px;
            filter: drop-shadow(0 4px 6px rgba(0,0,0,0.1));
        }

        /* SVG Styling */
        /* Apply to the group containing the path/polygon */
        .prefecture {
            fill: var(--primary-color);
            stroke: var(--border-color);
            stroke-width: 0.5px; /* Thinner border */
            cursor: pointer;
            transition: fill 0.2s ease;
            pointer-events: all;
        }

        .prefecture:hover {
            fill: var(--hover-color);
        }

        .prefecture.active {
            fill: #FFD700; /* Gold for selected */
        }

        /* Ensure child paths inherit interactions */
        .prefecture * {
            cursor: pointer;
            pointer-events: all;
        }

        /* Info Panel */
        .info-panel {
            width: 400px;
            background: white;
            box-shadow: -2px 0 10px rgba(0,0,0,0.1);
            padding: 30px;
            overflow-y: auto;
            display: flex;
            flex-direction: column;
            z-index: 10;
        }

        .panel-header {
            border-bottom: 2px solid var(--primary-color);
            padding-bottom: 15px;
            margin-bottom: 20px;
        }

        .prefecture-name {
            font-size: 2.5rem;
            margin: 0;
            color: var(--text-color);
        }

        .prefecture-en {
            color: #888;
            font-size: 1rem;
            letter-spacing: 1px;
            text-transform: uppercase;
        }

        .info-card {
            background: #fff;
            border-radius: 12px;
            margin-bottom: 20px;
        }

        .info-item {
            margin-bottom: 25px;
        }

        .info-label {
            font-size: 0.9rem;
            color: var(--primary-color);
            font-weight: bold;
            display: block;
            margin-bottom: 5px;
        }

        .info-content {
            font-size: 1.1rem;
            line-height: 1.6;
        }

        .empty-state {
            text-align: center;
            color: #aaa;
            margin-top: 50%;
            transform: translateY(-50%);
        }

        /* Action Buttons */
        .action-buttons {
            margin-top: auto;
            padding-top: 20px;
            display: flex;
            flex-direction: column;
            gap: 10px;
        }

        .btn {
            display: block;
            width: 100%;
            padding: 12px;
            text-align: center;
            border-radius: 8px;
            text-decoration: none;
            font-weight: bold;
            transition: background 0.2s, transform 0.1s;
            border: none;
            cursor: pointer;
        }

        .btn:active {
            transform: scale(0.98);
        }

        .btn-google {
            background-color: #4285F4;
            color: white;
        }
        .btn-google:hover { background-color: #357ae8; }

        .btn-maps {
            background-color: #34A853;
            color: white;
        }
        .btn-maps:hover { background-color: #2c8c45; }

        /* Responsive */
        @media (max-width: 768px) {
            .app-container {
                flex-direction: column;
                height: auto;
                min-height: 100vh;
            }

            .map-section {
                height: 60vh;
                padding: 10px;
            }

            .info-panel {
                width: 100%;
                height: auto;
                min-height: 40vh;
                box-shadow: 0 -2px 10px rgba(0,0,0,0.1);
            }
        }
    </style>
</head>
<body>
    <div class="app-container">
        <div class="map-section">
"##;

/// Everything after the SVG: info panel, data tables, interaction script.
const PAGE_TAIL_TEMPLATE: &str = r##"
        </div>
        <div class="info-panel" id="infoPanel">
            <div class="empty-state">
                <h2>日本地図へようこそ</h2>
                <p>地図上の都道府県をクリックして、<br>観光情報を見つけましょう！</p>
            </div>
        </div>
    </div>

    <script>
        // Data Store (Concierge Tone)
        const guideData = __GUIDE_DATA__;

        const defaultData = __DEFAULT_DATA__;

        // DOM Elements
        const panel = document.getElementById('infoPanel');

        // Ensure SVG loaded before attaching
        const prefectures = document.querySelectorAll('.prefecture');

        // Event Listeners
        prefectures.forEach(pref => {
            // Click
            pref.addEventListener('click', (e) => {
                e.preventDefault();
                e.stopPropagation();

                const targetGroup = e.currentTarget;
                if (!targetGroup) return;

                const codeStr = targetGroup.getAttribute('data-code');
                const code = parseInt(codeStr, 10);

                const titleEl = targetGroup.querySelector('title');

                let data = guideData[code];
                let name = "都道府県";
                let en = "";

                if (titleEl) {
                    const parts = titleEl.textContent.split('/');
                    name = parts[0].trim();
                    if (parts[1]) en = parts[1].trim();
                }

                if (!data) {
                    // Use Default Data
                    data = { ...defaultData, name: name, en: en };
                }

                updatePanel(data);

                // Active State
                prefectures.forEach(p => p.classList.remove('active'));
                targetGroup.classList.add('active');
            });
        });

        function updatePanel(data) {
            panel.innerHTML = `
                <div class="panel-header">
                    <h1 class="prefecture-name">${data.name}</h1>
                    <span class="prefecture-en">${data.en}</span>
                </div>

                <div class="info-item">
                    <p class="info-content">${data.desc}</p>
                </div>

                <div class="info-card">
                    <div style="padding:15px;">
                        <span class="info-label">【必見スポット】</span>
                        <div class="info-content">${data.spot}</div>
                    </div>
                </div>

                <div class="info-card">
                    <div style="padding:15px;">
                        <span class="info-label">【ローカルグルメ】</span>
                        <div class="info-content">${data.food}</div>
                    </div>
                </div>

                <!-- Hidden Gems Removed -->

                <div class="action-buttons">
                    <a href="https://www.google.com/search?q=${encodeURIComponent(data.name)}+観光+おすすめ" target="_blank" class="btn btn-google">
                        Googleで観光情報を検索
                    </a>
                    <a href="https://www.google.com/maps/search/${encodeURIComponent(data.name)}+観光地" target="_blank" class="btn btn-maps">
                        Googleマップで確認
                    </a>
                </div>
            `;
        }
    </script>
</body>
</html>
"##;
