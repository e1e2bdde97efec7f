use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Token the fake accepts for cloud directories.
pub const CLOUD_TOKEN: &str = "token";

/// The only Atlas Cloud endpoint the fake can reach.
pub const CLOUD_URL: &str = "http://127.0.0.1:8080";

/// Shell stand-in for the atlas CLI.
///
/// Applies `*.sql` files from the local or cloud directory in name order,
/// remembers what it applied, and prints a report in atlas' JSON shape.
/// Cloud directories are published under `cloud/<name>` and require a project
/// file whose `atlas.env` environment points at [`CLOUD_URL`] with
/// [`CLOUD_TOKEN`].
pub struct FakeAtlas {
    root: PathBuf,
    bin: PathBuf,
}

const SCRIPT: &str = r#"#!/bin/sh
ROOT='@ROOT@'
printf '%s\n' "$*" >> "$ROOT/calls.log"

dir=""
config=""
env_name=""
amount=0
while [ $# -gt 0 ]; do
    case "$1" in
        --dir) dir="$2"; shift 2 ;;
        --config) config="$2"; shift 2 ;;
        --env) env_name="$2"; shift 2 ;;
        --url|--format|--baseline|--tx-mode|--revisions-schema) shift 2 ;;
        --*) shift ;;
        *)
            case "$1" in
                ''|*[!0-9]*) ;;
                *) amount="$1" ;;
            esac
            shift ;;
    esac
done

if [ -f "$ROOT/fail" ]; then
    printf '{"Current":"","Error":"%s"}\n' "$(cat "$ROOT/fail")"
    echo "Error: $(cat "$ROOT/fail")" >&2
    exit 1
fi

if [ -n "$config" ]; then
    path="${config#file://}"
    cp "$path" "$ROOT/last-config.hcl"
    printf '%s\n' "$path" > "$ROOT/last-config.path"
    if [ "$env_name" != "atlas" ] || ! grep -qx '  name = atlas.env' "$path"; then
        echo "Error: env \"$env_name\" not defined in project file" >&2
        exit 1
    fi
    endpoint=$(sed -n 's/^ *url = "\(.*\)"$/\1/p' "$path")
    endpoint="${endpoint:-https://api.atlasgo.cloud}"
    if [ "$endpoint" != '@CLOUD_URL@' ]; then
        echo "Error: Post \"$endpoint/api/query\": dial tcp: connection refused" >&2
        exit 1
    fi
    token=$(sed -n 's/^ *token = "\(.*\)"$/\1/p' "$path")
    if [ "$token" != '@TOKEN@' ]; then
        echo "Error: unexpected status code 401: unauthorized" >&2
        exit 1
    fi
    name=$(sed -n 's|^ *dir = "atlas://\([^"?]*\).*$|\1|p' "$path")
    src="$ROOT/cloud/$name"
elif [ -n "$dir" ]; then
    src="${dir#file://}"
else
    echo "Error: no migration directory" >&2
    exit 1
fi

if [ ! -d "$src" ]; then
    echo "Error: sql/migrate: stat $src: no such file or directory" >&2
    exit 1
fi

state="$ROOT/applied.txt"
touch "$state"
current=$(tail -n 1 "$state" | cut -d_ -f1)
target="$current"
pending=""
applied=""
count=0
for f in $(ls "$src" | sort); do
    case "$f" in
        *.sql) ;;
        *) continue ;;
    esac
    if grep -qxF "$f" "$state"; then
        continue
    fi
    if [ "$amount" -gt 0 ] && [ "$count" -ge "$amount" ]; then
        break
    fi
    version="${f%%_*}"
    desc="${f#*_}"
    desc="${desc%.sql}"
    file="\"Name\":\"$f\",\"Version\":\"$version\",\"Description\":\"$desc\""
    pending="$pending${pending:+,}{$file}"
    applied="$applied${applied:+,}{$file,\"Applied\":[]}"
    printf '%s\n' "$f" >> "$state"
    target="$version"
    count=$((count + 1))
done

printf '{"Driver":"sqlite3","Dir":"%s","Pending":[%s],"Applied":[%s],"Current":"%s","Target":"%s"}\n' \
    "$dir" "$pending" "$applied" "$current" "$target"
"#;

impl FakeAtlas {
    pub fn install(root: &Path) -> Self {
        fs::create_dir_all(root.join("cloud")).expect("Failed to create fake atlas root");
        let bin = root.join("atlas");

        let script = SCRIPT
            .replace("@ROOT@", &root.to_string_lossy())
            .replace("@TOKEN@", CLOUD_TOKEN)
            .replace("@CLOUD_URL@", CLOUD_URL);
        fs::write(&bin, script).expect("Failed to write atlas script");

        let mut perms = fs::metadata(&bin).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&bin, perms).expect("Failed to set permissions");

        Self { root: root.to_path_buf(), bin }
    }

    pub fn bin(&self) -> &Path {
        &self.bin
    }

    /// Argument lines of every invocation so far.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.root.join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Project file passed with `--config` on the last cloud invocation.
    pub fn last_config(&self) -> Option<String> {
        fs::read_to_string(self.root.join("last-config.hcl")).ok()
    }

    /// Path the project file had while atlas was running.
    pub fn last_config_path(&self) -> Option<PathBuf> {
        fs::read_to_string(self.root.join("last-config.path"))
            .ok()
            .map(|path| PathBuf::from(path.trim()))
    }

    /// Serve `migrations` as the cloud directory `name`.
    pub fn publish_cloud_dir(&self, name: &str, migrations: &Path) {
        let target = self.root.join("cloud").join(name);
        super::copy_dir(migrations, &target);
    }

    /// Make the next invocations print a report carrying `error` and exit 1.
    pub fn fail_with(&self, error: &str) {
        fs::write(self.root.join("fail"), error).expect("Failed to write failure marker");
    }
}
